pub mod about;
pub mod admin_panel;
pub mod button;
pub mod contact_section;
pub mod footer;
pub mod header;
pub mod hero;
pub mod login_modal;
pub mod modal;
pub mod order_popup;
pub mod product_grid;
pub mod product_modal;
