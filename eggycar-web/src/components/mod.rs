pub mod footer;
pub mod game_card;
pub mod game_embed;
pub mod layout;
pub mod quick_links;
pub mod site_nav;
