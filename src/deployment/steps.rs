pub mod deepfake_detection;
pub mod test_token;
pub mod verification;
