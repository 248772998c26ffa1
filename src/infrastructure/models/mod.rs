mod hugging_face_provider;

pub use hugging_face_provider::HuggingFaceModelProvider;
