//! A configurable single-line text input.
//!
//! The field renders an optional title label, an input row (plain or
//! masked), an optional trailing icon and an optional error line. Appearance
//! falls back to a [`TextFieldDefaults`] value injected when the properties
//! are built; every attribute can be overridden with a builder method.
//!
//! The text value is owned by the parent: it arrives through
//! [`TextFieldProperties::content`] and edits are reported through the
//! `on_change` callback. The field clamps the value to `max_count` grapheme
//! clusters on every change, so the stored value never exceeds the budget.

use std::cmp;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::defaults::{BorderType, ColourPair, ColourScheme, FontStyle, TextFieldDefaults};
use crate::{
    component::{BindingMatch, BindingTransition, Callback, Component, Layout, ShouldRender},
    terminal::{Canvas, Colour, Key, Rect, Style},
    text::{self, TruncationMode},
};

/// Icon shown while a secure field displays its text.
pub const SECURE_ICON_OPEN: char = '◉';
/// Icon shown while a secure field masks its text.
pub const SECURE_ICON_CLOSED: char = '◎';

const MASK: &str = "•";

/// An immutable-per-render snapshot of everything that drives a
/// [`TextField`], built fluently.
///
/// [`TextFieldProperties::new`] seeds every stylable attribute from the
/// given defaults; each setter consumes the value and returns the modified
/// one, so a configured snapshot is never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFieldProperties {
    pub content: String,
    pub title: Option<String>,
    pub placeholder: String,
    pub focused: bool,
    pub disabled: bool,
    pub error: bool,
    pub error_message: String,
    pub secure: bool,
    pub secure_icon_open: char,
    pub secure_icon_closed: char,
    pub trailing_icon: Option<char>,
    pub on_trailing_icon_click: Option<Callback<()>>,
    pub on_change: Option<Callback<String>>,
    pub max_count: usize,
    pub truncation_mode: TruncationMode,
    pub colour_scheme: ColourScheme,
    pub text_colour: ColourPair,
    pub title_colour: ColourPair,
    pub placeholder_colour: ColourPair,
    pub disable_colour: ColourPair,
    pub background_colour: ColourPair,
    pub error_colour: ColourPair,
    pub border_colour: ColourPair,
    pub border_colour_is_explicit: bool,
    pub title_font: FontStyle,
    pub error_font: FontStyle,
    pub border_width: usize,
    pub corner_radius: usize,
    pub border_type: BorderType,
    pub disable_autocorrection: bool,
}

impl TextFieldProperties {
    /// A plain, non-secure, unbounded field seeded from `defaults`.
    pub fn new(defaults: &TextFieldDefaults) -> Self {
        Self {
            content: String::new(),
            title: None,
            placeholder: String::new(),
            focused: false,
            disabled: false,
            error: false,
            error_message: String::new(),
            secure: false,
            secure_icon_open: SECURE_ICON_OPEN,
            secure_icon_closed: SECURE_ICON_CLOSED,
            trailing_icon: None,
            on_trailing_icon_click: None,
            on_change: None,
            max_count: 0,
            truncation_mode: TruncationMode::Tail,
            colour_scheme: ColourScheme::Light,
            text_colour: defaults.text_colour,
            title_colour: defaults.title_colour,
            placeholder_colour: defaults.placeholder_colour,
            disable_colour: defaults.disable_colour,
            background_colour: defaults.background_colour,
            error_colour: defaults.error_colour,
            border_colour: defaults.border_colour,
            border_colour_is_explicit: false,
            title_font: defaults.title_font,
            error_font: defaults.error_font,
            border_width: defaults.border_width,
            corner_radius: defaults.corner_radius,
            border_type: defaults.border_type,
            disable_autocorrection: defaults.disable_autocorrection,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_colour(mut self, colour: Colour) -> Self {
        self.title_colour.light = colour;
        self
    }

    pub fn dark_title_colour(mut self, colour: Colour) -> Self {
        self.title_colour.dark = colour;
        self
    }

    pub fn title_font(mut self, font: FontStyle) -> Self {
        self.title_font = font;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn placeholder_colour(mut self, colour: Colour) -> Self {
        self.placeholder_colour.light = colour;
        self
    }

    pub fn dark_placeholder_colour(mut self, colour: Colour) -> Self {
        self.placeholder_colour.dark = colour;
        self
    }

    pub fn text_colour(mut self, colour: Colour) -> Self {
        self.text_colour.light = colour;
        self
    }

    pub fn dark_text_colour(mut self, colour: Colour) -> Self {
        self.text_colour.dark = colour;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn disable_colour(mut self, colour: Colour) -> Self {
        self.disable_colour.light = colour;
        self
    }

    pub fn dark_disable_colour(mut self, colour: Colour) -> Self {
        self.disable_colour.dark = colour;
        self
    }

    /// Sets the validation state: whether the error line is shown and the
    /// message it displays.
    pub fn error(mut self, error: bool, message: impl Into<String>) -> Self {
        self.error = error;
        self.error_message = message.into();
        self
    }

    pub fn error_colour(mut self, colour: Colour) -> Self {
        self.error_colour.light = colour;
        self
    }

    pub fn dark_error_colour(mut self, colour: Colour) -> Self {
        self.error_colour.dark = colour;
        self
    }

    pub fn error_font(mut self, font: FontStyle) -> Self {
        self.error_font = font;
        self
    }

    /// Places `icon` in the trailing slot and invokes `on_click` when it is
    /// pressed. Ignored while the field is secure — a secure field owns the
    /// trailing slot for its mask toggle.
    pub fn trailing_icon(mut self, icon: char, on_click: impl Into<Callback<()>>) -> Self {
        self.trailing_icon = Some(icon);
        self.on_trailing_icon_click = Some(on_click.into());
        self
    }

    /// Masks the input (password-style). The trailing slot shows the
    /// open/closed icon pair and pressing it toggles the mask.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn secure_icons(mut self, open: char, closed: char) -> Self {
        self.secure_icon_open = open;
        self.secure_icon_closed = closed;
        self
    }

    /// Clamps the value to `max_count` grapheme clusters; zero means
    /// unbounded.
    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn truncation_mode(mut self, mode: TruncationMode) -> Self {
        self.truncation_mode = mode;
        self
    }

    /// Overrides the border colour. An explicit border colour wins over the
    /// error colour fallback.
    pub fn border_colour(mut self, colour: Colour) -> Self {
        self.border_colour.light = colour;
        self.border_colour_is_explicit = true;
        self
    }

    pub fn dark_border_colour(mut self, colour: Colour) -> Self {
        self.border_colour.dark = colour;
        self.border_colour_is_explicit = true;
        self
    }

    pub fn border_width(mut self, width: usize) -> Self {
        self.border_width = width;
        self
    }

    pub fn corner_radius(mut self, radius: usize) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    pub fn background_colour(mut self, colour: Colour) -> Self {
        self.background_colour.light = colour;
        self
    }

    pub fn dark_background_colour(mut self, colour: Colour) -> Self {
        self.background_colour.dark = colour;
        self
    }

    pub fn colour_scheme(mut self, scheme: ColourScheme) -> Self {
        self.colour_scheme = scheme;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// A hint for host input methods; it has no rendered effect in a
    /// terminal.
    pub fn disable_autocorrection(mut self, disable: bool) -> Self {
        self.disable_autocorrection = disable;
        self
    }

    pub fn on_change(mut self, on_change: impl Into<Callback<String>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Number of rows the field occupies: title and error rows are omitted
    /// from the layout entirely when absent.
    pub fn height(&self) -> usize {
        let title = if self.title.is_some() { 1 } else { 0 };
        let input = match self.border_type {
            BorderType::Box => 3,
            BorderType::Underline => 2,
        };
        let error = if self.error { 1 } else { 0 };
        title + input + error
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    CursorLeft,
    CursorRight,
    StartOfLine,
    EndOfLine,
    InsertChar(char),
    DeleteBackward,
    DeleteForward,
    PressTrailingIcon,
}

/// See the [module documentation](self).
pub struct TextField {
    properties: TextFieldProperties,
    frame: Rect,
    content: String,
    cursor: usize,
    masked: bool,
    trailing_icon: Option<char>,
}

impl TextField {
    /// The border colour after resolving the error fallback: an explicit
    /// border colour always wins, otherwise an active error paints the
    /// border in the error colour.
    pub fn border_colour(&self) -> Colour {
        let properties = &self.properties;
        if !properties.border_colour_is_explicit && properties.error {
            properties.error_colour.resolve(properties.colour_scheme)
        } else {
            properties.border_colour.resolve(properties.colour_scheme)
        }
    }

    /// The fill colour: the disable colour while the field is disabled.
    pub fn background_colour(&self) -> Colour {
        let properties = &self.properties;
        if properties.disabled {
            properties.disable_colour.resolve(properties.colour_scheme)
        } else {
            properties.background_colour.resolve(properties.colour_scheme)
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_editable(&self) -> bool {
        !self.properties.disabled
    }

    /// Whether a secure field currently hides its text.
    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn trailing_icon(&self) -> Option<char> {
        self.trailing_icon
    }

    pub fn height(&self) -> usize {
        self.properties.height()
    }

    fn text_colour(&self) -> Colour {
        self.properties
            .text_colour
            .resolve(self.properties.colour_scheme)
    }

    fn title_colour(&self) -> Colour {
        self.properties
            .title_colour
            .resolve(self.properties.colour_scheme)
    }

    fn placeholder_colour(&self) -> Colour {
        self.properties
            .placeholder_colour
            .resolve(self.properties.colour_scheme)
    }

    fn error_colour(&self) -> Colour {
        self.properties
            .error_colour
            .resolve(self.properties.colour_scheme)
    }

    fn current_trailing_icon(properties: &TextFieldProperties, masked: bool) -> Option<char> {
        if properties.secure {
            Some(if masked {
                properties.secure_icon_closed
            } else {
                properties.secure_icon_open
            })
        } else {
            properties.trailing_icon
        }
    }

    /// Clamps the value to the configured budget, notifying the parent when
    /// this rewrites it.
    fn clamp_content(&mut self) {
        let clamped = text::truncate(
            &self.content,
            self.properties.max_count,
            self.properties.truncation_mode,
        );
        if let std::borrow::Cow::Owned(clamped) = clamped {
            self.content = clamped;
            self.cursor = cmp::min(self.cursor, text::grapheme_count(&self.content));
            self.notify_change();
        }
    }

    fn notify_change(&self) {
        if let Some(on_change) = self.properties.on_change.as_ref() {
            on_change.emit(self.content.clone());
        }
    }

    fn cursor_visual_offset(&self) -> usize {
        if self.masked && self.properties.secure {
            self.cursor
        } else {
            self.content
                .graphemes(true)
                .take(self.cursor)
                .map(UnicodeWidthStr::width)
                .sum()
        }
    }

    fn stroke(&self) -> &'static BorderStroke {
        if self.properties.border_width >= 2 {
            &BorderStroke::HEAVY
        } else if self.properties.corner_radius > 0 {
            &BorderStroke::LIGHT_ROUNDED
        } else {
            &BorderStroke::LIGHT
        }
    }
}

impl Component for TextField {
    type Message = Message;
    type Properties = TextFieldProperties;

    fn create(properties: Self::Properties, frame: Rect) -> Self {
        let masked = properties.secure;
        let trailing_icon = Self::current_trailing_icon(&properties, masked);
        let content = properties.content.clone();
        let cursor = text::grapheme_count(&content);
        let mut field = Self {
            properties,
            frame,
            content,
            cursor,
            masked,
            trailing_icon,
        };
        field.clamp_content();
        field
    }

    fn change(&mut self, properties: Self::Properties) -> ShouldRender {
        if self.properties == properties {
            return ShouldRender::No;
        }
        if properties.secure != self.properties.secure {
            self.masked = properties.secure;
        }
        self.content = properties.content.clone();
        self.cursor = cmp::min(self.cursor, text::grapheme_count(&self.content));
        self.trailing_icon = Self::current_trailing_icon(&properties, self.masked);
        self.properties = properties;
        self.clamp_content();
        ShouldRender::Yes
    }

    fn resize(&mut self, frame: Rect) -> ShouldRender {
        self.frame = frame;
        ShouldRender::Yes
    }

    fn update(&mut self, message: Self::Message) -> ShouldRender {
        // A disabled field is inert: no edits, no icon presses.
        if self.properties.disabled {
            return ShouldRender::No;
        }
        match message {
            Message::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Message::CursorRight => {
                self.cursor = cmp::min(self.cursor + 1, text::grapheme_count(&self.content));
            }
            Message::StartOfLine => {
                self.cursor = 0;
            }
            Message::EndOfLine => {
                self.cursor = text::grapheme_count(&self.content);
            }
            Message::InsertChar(character) => {
                text::insert_char(&mut self.content, self.cursor, character);
                self.cursor += 1;
                self.notify_change();
                self.clamp_content();
            }
            Message::DeleteBackward => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    text::remove_grapheme(&mut self.content, self.cursor);
                    self.notify_change();
                }
            }
            Message::DeleteForward => {
                if self.cursor < text::grapheme_count(&self.content) {
                    text::remove_grapheme(&mut self.content, self.cursor);
                    self.notify_change();
                }
            }
            Message::PressTrailingIcon => {
                if self.properties.secure {
                    self.masked = !self.masked;
                    self.trailing_icon = Self::current_trailing_icon(&self.properties, self.masked);
                } else if let Some(on_click) = self.properties.on_trailing_icon_click.as_ref() {
                    on_click.emit(());
                }
            }
        }
        ShouldRender::Yes
    }

    fn view(&self) -> Layout {
        let properties = &self.properties;
        let width = self.frame.size.width;
        let background = self.background_colour();
        let base_style = Style::normal(background, self.text_colour());
        let border_style = Style::normal(background, self.border_colour());

        let mut canvas = Canvas::new(self.frame.size);
        canvas.clear(base_style);

        let mut y = 0;

        if let Some(title) = properties.title.as_ref() {
            let style = properties.title_font.style(background, self.title_colour());
            canvas.draw_str(0, y, style, title);
            y += 1;
        }

        let (input_row, content_x, icon_x) = match properties.border_type {
            BorderType::Box => {
                if properties.border_width > 0 && width >= 2 {
                    let stroke = self.stroke();
                    let middle = width - 2;
                    let top = format!(
                        "{}{}{}",
                        stroke.top_left,
                        stroke.horizontal.repeat(middle),
                        stroke.top_right
                    );
                    let bottom = format!(
                        "{}{}{}",
                        stroke.bottom_left,
                        stroke.horizontal.repeat(middle),
                        stroke.bottom_right
                    );
                    canvas.draw_str(0, y, border_style, &top);
                    canvas.draw_str(0, y + 1, border_style, stroke.vertical);
                    canvas.draw_str(width - 1, y + 1, border_style, stroke.vertical);
                    canvas.draw_str(0, y + 2, border_style, &bottom);
                }
                (y + 1, 2, width.saturating_sub(3))
            }
            BorderType::Underline => {
                let horizontal = if properties.border_width >= 2 {
                    "━"
                } else {
                    "─"
                };
                canvas.draw_str(0, y + 1, border_style, &horizontal.repeat(width));
                (y, 1, width.saturating_sub(2))
            }
        };

        // The content run stops short of the trailing icon and, for a box
        // border, the right border cell.
        let content_end = match self.trailing_icon {
            Some(_) => icon_x,
            None => match properties.border_type {
                BorderType::Box => width.saturating_sub(1),
                BorderType::Underline => width,
            },
        };
        let content_budget = content_end.saturating_sub(content_x);

        if self.content.is_empty() {
            let style = Style::normal(background, self.placeholder_colour());
            draw_clipped(
                &mut canvas,
                content_x,
                input_row,
                style,
                &properties.placeholder,
                content_budget,
            );
        } else if self.masked && properties.secure {
            let dots = MASK.repeat(text::grapheme_count(&self.content));
            draw_clipped(&mut canvas, content_x, input_row, base_style, &dots, content_budget);
        } else {
            draw_clipped(
                &mut canvas,
                content_x,
                input_row,
                base_style,
                &self.content,
                content_budget,
            );
        }

        if self.has_focus() {
            let cursor_x = content_x + self.cursor_visual_offset();
            let under_cursor = if self.masked && self.properties.secure {
                if self.cursor < text::grapheme_count(&self.content) {
                    MASK.to_string()
                } else {
                    " ".to_string()
                }
            } else {
                self.content
                    .graphemes(true)
                    .nth(self.cursor)
                    .unwrap_or(" ")
                    .to_string()
            };
            let cursor_style = Style::normal(self.text_colour(), background);
            if cursor_x < content_end {
                canvas.draw_str(cursor_x, input_row, cursor_style, &under_cursor);
            }
        }

        if let Some(icon) = self.trailing_icon {
            canvas.draw_str(icon_x, input_row, base_style, &icon.to_string());
        }

        if properties.error {
            let style = properties.error_font.style(background, self.error_colour());
            canvas.draw_str(0, input_row + 2, style, &properties.error_message);
        }

        canvas.into()
    }

    fn has_focus(&self) -> bool {
        self.properties.focused && !self.properties.disabled
    }

    fn input_binding(&self, pressed: &[Key]) -> BindingMatch<Self::Message> {
        let message = match pressed {
            &[Key::Ctrl('b')] | &[Key::Left] => Some(Message::CursorLeft),
            &[Key::Ctrl('f')] | &[Key::Right] => Some(Message::CursorRight),
            &[Key::Ctrl('a')] | &[Key::Home] => Some(Message::StartOfLine),
            &[Key::Ctrl('e')] | &[Key::End] => Some(Message::EndOfLine),
            &[Key::Ctrl('d')] | &[Key::Delete] => Some(Message::DeleteForward),
            &[Key::Backspace] => Some(Message::DeleteBackward),
            &[Key::Ctrl('t')] => Some(Message::PressTrailingIcon),
            &[Key::Char(character)]
                if character != '\n' && character != '\r' && character != '\t' =>
            {
                Some(Message::InsertChar(character))
            }
            _ => None,
        };
        BindingMatch {
            transition: BindingTransition::Clear,
            message,
        }
    }
}

/// Draws at most `budget` columns of `text`, cutting at a grapheme boundary.
fn draw_clipped(
    canvas: &mut Canvas,
    x: usize,
    y: usize,
    style: Style,
    text: &str,
    budget: usize,
) {
    let mut remaining = budget;
    let clipped: String = text
        .graphemes(true)
        .take_while(|grapheme| {
            let grapheme_width = UnicodeWidthStr::width(*grapheme);
            if grapheme_width <= remaining {
                remaining -= grapheme_width;
                true
            } else {
                false
            }
        })
        .collect();
    canvas.draw_str(x, y, style, &clipped);
}

struct BorderStroke {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl BorderStroke {
    const LIGHT: Self = Self {
        top_left: "┌",
        top_right: "┐",
        bottom_left: "└",
        bottom_right: "┘",
        horizontal: "─",
        vertical: "│",
    };

    const LIGHT_ROUNDED: Self = Self {
        top_left: "╭",
        top_right: "╮",
        bottom_left: "╰",
        bottom_right: "╯",
        horizontal: "─",
        vertical: "│",
    };

    const HEAVY: Self = Self {
        top_left: "┏",
        top_right: "┓",
        bottom_left: "┗",
        bottom_right: "┛",
        horizontal: "━",
        vertical: "┃",
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{Position, Size};
    use std::{cell::RefCell, rc::Rc};

    const WIDTH: usize = 24;

    fn defaults() -> TextFieldDefaults {
        TextFieldDefaults::default()
    }

    fn field(properties: TextFieldProperties) -> TextField {
        let frame = Rect::new(Position::new(0, 0), Size::new(WIDTH, properties.height()));
        TextField::create(properties, frame)
    }

    fn rendered(field: &TextField) -> Canvas {
        match field.view() {
            Layout::Canvas(canvas) => canvas,
            _ => panic!("text field should render a single canvas"),
        }
    }

    fn row(canvas: &Canvas, y: usize) -> String {
        let width = canvas.size().width;
        canvas.buffer()[y * width..(y + 1) * width]
            .iter()
            .map(|textel| {
                textel
                    .as_ref()
                    .map(|textel| textel.grapheme.as_ref())
                    .unwrap_or("")
            })
            .collect()
    }

    #[test]
    fn initial_content_is_clamped_per_truncation_mode() {
        let base = || {
            TextFieldProperties::new(&defaults())
                .content("hello world")
                .max_count(5)
        };
        let tail = field(base().truncation_mode(TruncationMode::Tail));
        assert_eq!(tail.content(), "hello");
        let head = field(base().truncation_mode(TruncationMode::Head));
        assert_eq!(head.content(), "world");
        let middle = field(base().truncation_mode(TruncationMode::Middle));
        assert_eq!(middle.content(), "he…ld");
    }

    #[test]
    fn middle_truncation_with_a_budget_of_one_keeps_only_the_ellipsis() {
        let field = field(
            TextFieldProperties::new(&defaults())
                .content("hello world")
                .max_count(1)
                .truncation_mode(TruncationMode::Middle),
        );
        assert_eq!(field.content(), "…");
        assert!(text::grapheme_count(field.content()) <= 1);
    }

    #[test]
    fn inserting_beyond_max_count_truncates_eagerly() {
        let changes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let changes = Rc::clone(&changes);
            move |content: String| changes.borrow_mut().push(content)
        };
        let mut field = field(
            TextFieldProperties::new(&defaults())
                .content("ab")
                .max_count(3)
                .on_change(on_change),
        );

        field.update(Message::InsertChar('c'));
        assert_eq!(field.content(), "abc");
        field.update(Message::InsertChar('d'));
        assert_eq!(field.content(), "abc");
        assert_eq!(
            changes.borrow().last().map(String::as_str),
            Some("abc"),
            "the clamped value is what the parent hears about"
        );
    }

    #[test]
    fn external_content_updates_are_clamped_too() {
        let mut field = field(TextFieldProperties::new(&defaults()).max_count(5));
        let properties = field.properties.clone().content("hello world");
        field.change(properties);
        assert_eq!(field.content(), "hello");
    }

    #[test]
    fn secure_toggle_twice_restores_icon_and_mask() {
        let mut field = field(
            TextFieldProperties::new(&defaults())
                .content("secret")
                .secure(true),
        );
        assert!(field.is_masked());
        assert_eq!(field.trailing_icon(), Some(SECURE_ICON_CLOSED));

        field.update(Message::PressTrailingIcon);
        assert!(!field.is_masked());
        assert_eq!(field.trailing_icon(), Some(SECURE_ICON_OPEN));

        field.update(Message::PressTrailingIcon);
        assert!(field.is_masked());
        assert_eq!(field.trailing_icon(), Some(SECURE_ICON_CLOSED));
    }

    #[test]
    fn masked_rendering_never_shows_the_text() {
        let field = field(
            TextFieldProperties::new(&defaults())
                .content("hunter2")
                .secure(true),
        );
        let canvas = rendered(&field);
        let input_row = row(&canvas, 1);
        assert!(input_row.contains(&MASK.repeat(7)));
        assert!(!input_row.contains("hunter2"));
    }

    #[test]
    fn trailing_icon_click_fires_unless_secure_or_disabled() {
        let clicks = Rc::new(RefCell::new(0));
        let on_click = {
            let clicks = Rc::clone(&clicks);
            move |_| *clicks.borrow_mut() += 1
        };
        let mut plain = field(TextFieldProperties::new(&defaults()).trailing_icon('✕', on_click));
        plain.update(Message::PressTrailingIcon);
        assert_eq!(*clicks.borrow(), 1);

        let disabled_properties = plain.properties.clone().disabled(true);
        plain.change(disabled_properties);
        plain.update(Message::PressTrailingIcon);
        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn border_colour_falls_back_to_error_colour() {
        let no_error = field(TextFieldProperties::new(&defaults()));
        assert_eq!(no_error.border_colour(), defaults().border_colour.light);

        let with_error = field(TextFieldProperties::new(&defaults()).error(true, "required"));
        assert_eq!(with_error.border_colour(), defaults().error_colour.light);
    }

    #[test]
    fn explicit_border_colour_wins_over_error() {
        let blue = Colour::rgb(0, 0, 215);
        let field = field(
            TextFieldProperties::new(&defaults())
                .border_colour(blue)
                .error(true, "required"),
        );
        assert_eq!(field.border_colour(), blue);
    }

    #[test]
    fn border_colour_respects_the_colour_scheme() {
        let light = field(TextFieldProperties::new(&defaults()));
        assert_eq!(light.border_colour(), defaults().border_colour.light);

        let dark =
            field(TextFieldProperties::new(&defaults()).colour_scheme(ColourScheme::Dark));
        assert_eq!(dark.border_colour(), defaults().border_colour.dark);
    }

    #[test]
    fn disabled_field_is_inert_and_uses_the_disable_colour() {
        let mut field = field(
            TextFieldProperties::new(&defaults())
                .content("ab")
                .disabled(true),
        );
        assert!(!field.is_editable());
        assert_eq!(field.background_colour(), defaults().disable_colour.light);

        field.update(Message::InsertChar('c'));
        field.update(Message::DeleteBackward);
        assert_eq!(field.content(), "ab");

        let enabled = field.properties.clone().disabled(false);
        field.change(enabled);
        assert!(field.is_editable());
        assert_eq!(
            field.background_colour(),
            defaults().background_colour.light
        );
    }

    #[test]
    fn error_line_is_rendered_only_when_the_error_flag_is_set() {
        let ok = field(TextFieldProperties::new(&defaults()));
        assert_eq!(ok.height(), 3);

        let broken = field(TextFieldProperties::new(&defaults()).error(true, "too short"));
        assert_eq!(broken.height(), 4);
        let canvas = rendered(&broken);
        assert!(row(&canvas, 3).contains("too short"));
    }

    #[test]
    fn placeholder_shows_only_while_empty() {
        let empty = field(TextFieldProperties::new(&defaults()).placeholder("type here"));
        assert!(row(&rendered(&empty), 1).contains("type here"));

        let filled = field(
            TextFieldProperties::new(&defaults())
                .placeholder("type here")
                .content("hi"),
        );
        let input_row = row(&rendered(&filled), 1);
        assert!(!input_row.contains("type here"));
        assert!(input_row.contains("hi"));
    }

    #[test]
    fn title_is_rendered_above_the_field() {
        let titled = field(TextFieldProperties::new(&defaults()).title("Username"));
        assert_eq!(titled.height(), 4);
        assert!(row(&rendered(&titled), 0).contains("Username"));
    }

    #[test]
    fn underline_border_draws_a_single_line() {
        let field = field(
            TextFieldProperties::new(&defaults())
                .content("x")
                .border_type(BorderType::Underline),
        );
        assert_eq!(field.height(), 2);
        let canvas = rendered(&field);
        assert!(row(&canvas, 0).contains('x'));
        assert_eq!(row(&canvas, 1), "─".repeat(WIDTH));
    }

    #[test]
    fn long_content_never_overwrites_the_box_border() {
        let field = field(TextFieldProperties::new(&defaults()).content("a".repeat(WIDTH * 2)));
        let canvas = rendered(&field);
        let input_row = row(&canvas, 1);
        assert!(input_row.starts_with('│'));
        assert!(input_row.ends_with('│'));
    }

    #[test]
    fn long_content_stops_short_of_the_trailing_icon() {
        let field = field(
            TextFieldProperties::new(&defaults())
                .content("a".repeat(WIDTH * 2))
                .trailing_icon('✕', |_| {}),
        );
        let canvas = rendered(&field);
        assert!(row(&canvas, 1).ends_with("✕ │"));
    }

    #[test]
    fn cursor_editing_operations() {
        let mut field = field(TextFieldProperties::new(&defaults()).content("abc"));
        field.update(Message::StartOfLine);
        field.update(Message::DeleteForward);
        assert_eq!(field.content(), "bc");
        field.update(Message::EndOfLine);
        field.update(Message::DeleteBackward);
        assert_eq!(field.content(), "b");
        field.update(Message::CursorLeft);
        field.update(Message::InsertChar('a'));
        assert_eq!(field.content(), "ab");
    }

    #[test]
    fn key_bindings_produce_edit_messages() {
        let field = field(TextFieldProperties::new(&defaults()));
        assert_eq!(
            field.input_binding(&[Key::Char('a')]).message,
            Some(Message::InsertChar('a'))
        );
        assert_eq!(
            field.input_binding(&[Key::Ctrl('t')]).message,
            Some(Message::PressTrailingIcon)
        );
        assert_eq!(field.input_binding(&[Key::Char('\n')]).message, None);
    }
}
