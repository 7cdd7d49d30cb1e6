pub mod flash_message;
