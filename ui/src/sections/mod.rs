// The page sections, top to bottom. Each one is static markup over
// the shared page state; the ids double as scroll anchors.

pub mod about;
pub mod community;
pub mod hero;
pub mod pokechain;
pub mod pokedex;
pub mod tokenomics;
pub mod wallet;

pub use about::AboutSection;
pub use community::CommunitySection;
pub use hero::HeroSection;
pub use pokechain::PokechainSection;
pub use pokedex::PokedexSection;
pub use tokenomics::TokenomicsSection;
pub use wallet::WalletSection;
