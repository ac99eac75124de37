pub mod analyze_direct;
pub mod upload_file;
