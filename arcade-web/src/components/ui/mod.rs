pub mod category_bar;
pub mod featured_section;
pub mod game_card;
pub mod game_grid;
pub mod game_player;

pub use category_bar::CategoryBar;
pub use featured_section::FeaturedSection;
pub use game_card::GameCard;
pub use game_grid::GameGrid;
pub use game_player::GamePlayer;
