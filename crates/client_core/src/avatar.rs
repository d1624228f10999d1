use shared::domain::EmployeeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Two-stop diagonal gradient behind a card's initials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarGradient {
    pub start: Rgb,
    pub end: Rgb,
}

const fn gradient(start: u32, end: u32) -> AvatarGradient {
    AvatarGradient {
        start: Rgb::from_hex(start),
        end: Rgb::from_hex(end),
    }
}

pub const AVATAR_PALETTE: [AvatarGradient; 8] = [
    gradient(0x667eea, 0x764ba2),
    gradient(0xf093fb, 0xf5576c),
    gradient(0x4facfe, 0x00f2fe),
    gradient(0x43e97b, 0x38f9d7),
    gradient(0xfa709a, 0xfee140),
    gradient(0x30cfd0, 0x330867),
    gradient(0xa8edea, 0xfed6e3),
    gradient(0xff9a9e, 0xfecfef),
];

/// Palette entry for `id mod 8`. Negative ids wrap instead of panicking.
pub fn avatar_gradient(id: EmployeeId) -> AvatarGradient {
    let index = id.0.rem_euclid(AVATAR_PALETTE.len() as i64) as usize;
    AVATAR_PALETTE[index]
}

pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
