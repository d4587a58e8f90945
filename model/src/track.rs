//! The fixed background-music playlist.

/// One playable audio entry: a display title and a remote MP3 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub source_url: &'static str,
}

/// The playlist is known at load time and never changes.
pub static PLAYLIST: [Track; 4] = [
    Track {
        title: "JME - The Very Best",
        source_url: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/JME%20-%20THE%20VERY%20BEST%20%5B%20ezmp3.cc%20%5D-jJucVODtmvt6NqUFVjSNY4leVjrCMa.mp3",
    },
    Track {
        title: "Scrufizzer - Pikachu",
        source_url: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/Scrufizzer%20%20-%20Pikachu%20Prod%20By%20NibzMusic%20%5B%20ezmp3.cc%20%5D-2EoEz6zR6XiOukTNwRro65DYGJaFP2.mp3",
    },
    Track {
        title: "Dialect - Pikachu Part 1",
        source_url: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/Pikachu%20(Poke%CC%81mon)%20-%20Shellers%20%5BPart%201%5D%20_%20FITS%20%5B%20ezmp3.cc%20%5D-GpLCIZWeAkfiXLq9BOFqHpeMubmENn.mp3",
    },
    Track {
        title: "Dialect - Pikachu Part 2",
        source_url: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/Pikachu%20-%20Shellers%20%5BPart%202%5D%20_%20FITS%20%5B%20ezmp3.cc%20%5D-Q0hihzpakeLpcwKly4EHzz45tILviA.mp3",
    },
];

/// Number of tracks in the playlist; index arithmetic wraps modulo this.
pub const TRACK_COUNT: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_count_matches_playlist_length() {
        assert_eq!(PLAYLIST.len(), TRACK_COUNT);
    }

    #[test]
    fn every_track_has_a_title_and_an_mp3_source() {
        for track in &PLAYLIST {
            assert!(!track.title.is_empty());
            assert!(track.source_url.starts_with("https://"));
            assert!(track.source_url.ends_with(".mp3"));
        }
    }
}
