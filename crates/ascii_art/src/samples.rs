/// Built-in image shown before the interactive prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub location: &'static str,
    pub title: &'static str,
}

/// Creative Commons photos, one landscape and one portrait.
pub const SAMPLES: [Sample; 2] = [
    Sample {
        location: "https://c0.wallpaperflare.com/preview/193/17/205/zebra-in-savanna.jpg",
        title: "Zebra in African savanna",
    },
    Sample {
        location: "https://images.rawpixel.com/image_800/cHJpdmF0ZS9sci9pbWFnZXMvd2Vic2l0ZS8yMDIzLTAzL2ZsMTU2MzAzMDUwMzktaW1hZ2VfMS5qcGc.jpg",
        title: "Emperor Penguin",
    },
];
