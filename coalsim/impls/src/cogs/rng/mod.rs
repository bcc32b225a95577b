mod seeded;

pub use seeded::SeededStdRng;
