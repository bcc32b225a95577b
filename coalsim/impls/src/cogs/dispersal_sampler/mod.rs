mod flow_weighted;

pub use flow_weighted::FlowWeightedDispersalSampler;
