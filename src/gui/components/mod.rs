// src/gui/components/mod.rs
pub mod block_panel;
pub mod command_buttons;
pub mod output_area;
pub mod top_bar;
