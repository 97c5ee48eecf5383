mod analyze_content;

pub use analyze_content::AnalyzeContent;
