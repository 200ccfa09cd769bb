use {
    clap::ValueEnum,
    ratatui::{
        style::{Color, Modifier, Style},
        widgets::BorderType,
    },
    serde::Deserialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    /// Cream paper, brown ink
    #[default]
    Classic,
    /// Indigo night sky with silver ink
    Moonlight,
    /// Leafy greens
    Forest,
    /// Deep blue sea
    Ocean,
}

/// Colours and borders for the book. Build one with [`Theme::builder`] or
/// pick a [`ThemePreset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub paper: Color,
    pub ink: Color,
    pub accent: Color,
    pub fold: Color,
    pub muted: Color,
    pub border: BorderType,
    pub cover_border: BorderType,
}

impl Theme {
    pub fn builder(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder::new(name)
    }

    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Classic => Self::builder("classic").build(),
            ThemePreset::Moonlight => Self::builder("moonlight")
                .paper(Color::Rgb(30, 27, 75))
                .ink(Color::Rgb(226, 232, 240))
                .accent(Color::Rgb(196, 181, 253))
                .fold(Color::Rgb(99, 102, 241))
                .muted(Color::Rgb(148, 163, 184))
                .border(BorderType::Rounded)
                .build(),
            ThemePreset::Forest => Self::builder("forest")
                .paper(Color::Rgb(240, 253, 244))
                .ink(Color::Rgb(20, 83, 45))
                .accent(Color::Rgb(22, 163, 74))
                .fold(Color::Rgb(134, 239, 172))
                .build(),
            ThemePreset::Ocean => Self::builder("ocean")
                .paper(Color::Rgb(236, 254, 255))
                .ink(Color::Rgb(22, 78, 99))
                .accent(Color::Rgb(8, 145, 178))
                .fold(Color::Rgb(103, 232, 249))
                .cover_border(BorderType::Double)
                .build(),
        }
    }

    pub fn page_style(&self) -> Style {
        Style::default().fg(self.ink).bg(self.paper)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.paper)
            .add_modifier(Modifier::BOLD)
    }

    pub fn fold_style(&self) -> Style {
        Style::default().fg(self.fold).bg(self.paper)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).bg(self.paper)
    }
}

#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            theme: Theme {
                name: name.into(),
                paper: Color::Rgb(253, 246, 227),
                ink: Color::Rgb(68, 45, 28),
                accent: Color::Rgb(180, 83, 9),
                fold: Color::Rgb(214, 188, 150),
                muted: Color::Rgb(146, 120, 96),
                border: BorderType::Plain,
                cover_border: BorderType::Thick,
            },
        }
    }

    pub const fn paper(mut self, color: Color) -> Self {
        self.theme.paper = color;
        self
    }

    pub const fn ink(mut self, color: Color) -> Self {
        self.theme.ink = color;
        self
    }

    pub const fn accent(mut self, color: Color) -> Self {
        self.theme.accent = color;
        self
    }

    pub const fn fold(mut self, color: Color) -> Self {
        self.theme.fold = color;
        self
    }

    pub const fn muted(mut self, color: Color) -> Self {
        self.theme.muted = color;
        self
    }

    pub const fn border(mut self, border: BorderType) -> Self {
        self.theme.border = border;
        self
    }

    pub const fn cover_border(mut self, border: BorderType) -> Self {
        self.theme.cover_border = border;
        self
    }

    pub fn build(self) -> Theme {
        self.theme
    }
}
