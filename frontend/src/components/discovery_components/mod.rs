pub mod dataset_card;
pub mod filter_panel;
pub mod result_list_controls;
pub mod result_list_view;
pub mod search_input_bar;
