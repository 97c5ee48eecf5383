mod home;

pub use home::{analyze_news, AnalyzeNewsFn, HomePage};
