#![allow(clippy::arithmetic_side_effects)]
use {
    super::{config::BookLayout, theme::Theme},
    hashbrown::HashMap,
    image::ImageReader,
    ratatui::{
        buffer::Buffer,
        layout::{Constraint, Layout, Rect},
        text::Line,
        widgets::{Block, Clear, LineGauge, Paragraph, StatefulWidget, Widget, Wrap},
    },
    ratatui_image::{StatefulImage, picker::Picker, protocol::StatefulProtocol},
    storyflip::{
        FlipDirection, FlipView, MediaKind, PageRenderer, Phase, Story, StoryPage, spread,
    },
};

/// Draws the book into a ratatui buffer.
pub struct BookRenderer {
    theme: Theme,
    layout: BookLayout,
    area: Rect,
    picker: Option<Picker>,
    /// Decoded illustrations by page; `None` marks a failed decode.
    illustrations: HashMap<usize, Option<StatefulProtocol>>,
}

impl BookRenderer {
    pub fn new(theme: Theme, layout: BookLayout, picker: Option<Picker>) -> Self {
        Self {
            theme,
            layout,
            area: Rect::default(),
            picker,
            illustrations: HashMap::new(),
        }
    }

    pub const fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Decodes the illustration of `page` if it is a local image and has not
    /// been tried yet.
    pub fn load_illustration(&mut self, story: &Story, page: usize) {
        if self.illustrations.contains_key(&page) {
            return;
        }
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        let Some(path) = story
            .page(page)
            .and_then(|p| p.illustration.as_deref())
            .filter(|reference| MediaKind::classify(reference).is_image())
            .and_then(|reference| story.resolve_asset(reference))
        else {
            return;
        };

        let decoded = ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| e.to_string())
            .and_then(|reader| reader.decode().map_err(|e| e.to_string()));

        let protocol = match decoded {
            Ok(img) => Some(picker.new_resize_protocol(img)),
            Err(e) => {
                log::warn!("could not decode {}: {e}", path.display());
                None
            }
        };

        self.illustrations.insert(page, protocol);
    }

    fn render_text(&self, page: &StoryPage, area: Rect, buf: &mut Buffer) {
        Paragraph::new(page.text.as_str())
            .style(self.theme.page_style())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_media(&mut self, number: usize, page: &StoryPage, area: Rect, buf: &mut Buffer) {
        if let Some(Some(protocol)) = self.illustrations.get_mut(&number) {
            StatefulImage::default().render(area, buf, protocol);
            return;
        }

        let lines: Vec<Line<'_>> = page
            .assets()
            .map(|reference| {
                let kind = MediaKind::classify(reference);
                let icon = match kind {
                    MediaKind::Video(_) => "\u{25b6}",
                    MediaKind::Image(_) => "\u{25a3}",
                    MediaKind::Remote | MediaKind::Unknown => "\u{2022}",
                };
                Line::styled(
                    format!("{icon} {}: {reference}", kind.label()),
                    self.theme.muted_style(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .style(self.theme.page_style())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_single(&mut self, number: usize, page: &StoryPage, area: Rect, buf: &mut Buffer) {
        if page.assets().next().is_none() {
            self.render_text(page, area, buf);
            return;
        }

        let [text_area, media_area] =
            Layout::vertical([Constraint::Percentage(40), Constraint::Min(0)]).areas(area);
        self.render_text(page, text_area, buf);
        self.render_media(number, page, media_area, buf);
    }

    fn render_spread(&mut self, number: usize, page: &StoryPage, area: Rect, buf: &mut Buffer) {
        let [left, seam, right] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let [left_body, left_label] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(left);
        let [right_body, right_label] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(right);

        self.render_text(page, left_body, buf);
        self.render_media(number, page, right_body, buf);

        for y in seam.top()..seam.bottom() {
            buf.set_string(seam.x, y, "\u{2502}", self.theme.fold_style());
        }

        if let Some((left_leaf, right_leaf)) = spread::spread_to_leaves(number) {
            Line::styled(format!("p. {left_leaf}"), self.theme.muted_style())
                .left_aligned()
                .render(left_label, buf);
            Line::styled(format!("p. {right_leaf}"), self.theme.muted_style())
                .right_aligned()
                .render(right_label, buf);
        }
    }

    fn render_page(&mut self, number: usize, page: &StoryPage, area: Rect, buf: &mut Buffer) {
        match self.layout {
            BookLayout::Single => self.render_single(number, page, area, buf),
            BookLayout::Spread => self.render_spread(number, page, area, buf),
        }
    }

    /// Lays the turning leaf over the page: the region past the fold shows
    /// the page being revealed, the fold itself is a shaded column.
    fn render_turn(&self, view: &FlipView<'_>, area: Rect, buf: &mut Buffer) {
        let width = ((view.turn.clamp(0.0, 1.0) * f32::from(area.width)).round() as u16)
            .min(area.width);
        if width == 0 {
            return;
        }

        let (revealed, fold_x, fold_symbol) = match view.direction() {
            FlipDirection::Next => {
                let x = area.right() - width;
                (Rect { x, width, ..area }, x, "\u{2590}")
            }
            FlipDirection::Previous => (
                Rect { width, ..area },
                area.x + width - 1,
                "\u{258c}",
            ),
        };

        Clear.render(revealed, buf);
        Block::new()
            .style(self.theme.page_style())
            .render(revealed, buf);

        if let Some((_, page)) = view.preview {
            self.render_text(page, revealed, buf);
        }

        for y in area.top()..area.bottom() {
            buf.set_string(fold_x, y, fold_symbol, self.theme.fold_style());
        }
    }

    /// Whether the page on display is a cover, judged by its leaves.
    fn is_cover(&self, view: &FlipView<'_>) -> bool {
        match self.layout {
            BookLayout::Single => spread::is_hard_leaf(view.page_number, view.total_pages),
            BookLayout::Spread => {
                let leaves = spread::leaf_count(view.total_pages);
                spread::spread_to_leaves(view.page_number).is_some_and(|(left, right)| {
                    spread::is_hard_leaf(left, leaves) || spread::is_hard_leaf(right, leaves)
                })
            }
        }
    }

    fn render_footer(&self, view: &FlipView<'_>, area: Rect, buf: &mut Buffer) {
        let [prev, gauge, next] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(area);

        let arrow_style = |enabled: bool| {
            if enabled {
                self.theme.title_style()
            } else {
                self.theme.muted_style()
            }
        };

        Line::styled("\u{25c0}", arrow_style(view.can_go_prev)).render(prev, buf);
        Line::styled("\u{25b6}", arrow_style(view.can_go_next))
            .right_aligned()
            .render(next, buf);

        let ratio = view.page_number as f64 / view.total_pages.max(1) as f64;
        LineGauge::default()
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{}/{}", view.page_number, view.total_pages))
            .style(self.theme.muted_style())
            .filled_style(self.theme.title_style())
            .unfilled_style(self.theme.muted_style())
            .render(gauge, buf);
    }
}

impl PageRenderer for BookRenderer {
    type Target = Buffer;

    fn render(&mut self, view: &FlipView<'_>, buf: &mut Buffer) {
        let area = self.area.intersection(buf.area);
        if area.width < 4 || area.height < 4 {
            return;
        }

        let cover = self.is_cover(view);
        let block = Block::bordered()
            .border_type(if cover {
                self.theme.cover_border
            } else {
                self.theme.border
            })
            .border_style(self.theme.fold_style())
            .title(Line::styled(format!(" {} ", view.title), self.theme.title_style()).centered())
            .style(self.theme.page_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        self.render_page(view.page_number, view.page, body, buf);

        if view.phase != Phase::Idle {
            self.render_turn(view, body, buf);
        }

        self.render_footer(view, footer, buf);
    }
}
