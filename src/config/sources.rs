pub mod toml_file;
