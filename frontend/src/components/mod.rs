pub mod expenses;
pub mod filter_bar;
pub mod forms;
pub mod header;
pub mod total_display;
