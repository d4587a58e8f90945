// Shared building blocks for the page sections.

pub mod gradient_card;
pub mod site_header;
pub mod transport_bar;

pub use gradient_card::GradientCard;
pub use site_header::SiteHeader;
pub use transport_bar::TransportBar;
