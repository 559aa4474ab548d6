pub mod image_ingest;
