//! Page components
//!
//! Every component receives its data as props. Only the page root in
//! `app` owns mutable page-wide state.

pub mod background;
pub mod card;
pub mod footer;
pub mod grid;
pub mod header;
pub mod hero;
pub mod icon;
pub mod particles;
pub mod search_bar;

pub use background::Background;
pub use card::ProjectCard;
pub use footer::Footer;
pub use grid::CardGrid;
pub use header::Header;
pub use hero::Hero;
pub use icon::IconSvg;
pub use particles::MovingParticles;
pub use search_bar::SearchBar;
