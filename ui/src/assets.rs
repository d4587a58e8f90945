//! Remote artwork and outbound links. All assets are hosted
//! externally and consumed as-is; nothing is processed locally.

pub const TEDDI_ICON: &str = "https://i.ibb.co/nfYN0YW/teddinenew.png";

pub const TEDDY_ICON: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/TEDDYBEAR-COINMARKETCAP-LOGO-200X200-QrlRkSKSr3J9R9pq35ZxDEyE6LHS07.webp";

pub const POKEMON_LOGO: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/images%20(1)-ZMiiH2b3i6xS9jPr1wDUz4vFGiFXAB.png";

pub const PULSECHAIN_LOGO: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/pulsechain-card.ead95153-tOblpYBeTyIO8ypzGjd1qe2s6T32rJ.png";

pub const HERO_BANNER: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/il_300x300.6275181720_sjnk-tLQj90c9u3mjiMFDJcywqZ505wGs7L.webp";

pub const TEDDIURSA_PORTRAIT: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/teddiursa-400x400-sHct1AhfULZwxz7IauRaOEKUfXQfs7.webp";

pub const POKEDEX_ART: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/dev.mariinkys.StarryDex-dPIUVVN4nPvnsJ6PAsy7EbIOAoO7qB.svg";

pub const SUN_SYMBOL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/pokemon_sun_symbol_by_alexalan_d9tl89y-fullview-Oin302oKnKCSRchRtiIZiapEtgyHJ3.png";

pub const MOON_SYMBOL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/pokemon_moon_logo__5000x5000__by_nicholas_checchia_d9tma2e-pre-sUfpzFbYRUW5IMFyUlwDduI8aB3qTX.png";

// Community links. Static hyperlinks only; no API calls behind them.
pub const TEDDIURSA_TELEGRAM_URL: &str = "https://t.me/PokechainTeddi";
pub const POKECENTER_TELEGRAM_URL: &str = "https://t.me/Real_Pokecenter";
pub const TWITTER_URL: &str = "https://x.com/PokechainTeddi";
