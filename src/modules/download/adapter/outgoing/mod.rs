mod resume_store_local;

pub use resume_store_local::ResumeStoreLocal;
