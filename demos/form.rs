//! A small form exercising every text field knob: titles, placeholders,
//! secure entry, trailing icons, validation errors, max-count truncation, a
//! disabled field and light/dark colour schemes.
//!
//! Keys: TAB / Shift-TAB move focus, C-t presses the trailing icon (toggles
//! the mask on the password field), A-d flips the colour scheme, C-x C-c or
//! ESC quits.

use std::{cell::RefCell, rc::Rc};

use formfield::{
    components::{
        defaults::{BorderType, ColourScheme, TextFieldDefaults},
        text_field::{Message as FieldMessage, TextField, TextFieldProperties},
    },
    frontend::Crossterm,
    layout::{auto, column, fixed},
    App, BindingMatch, BindingTransition, Callback, Canvas, Component, Key, Layout, Position,
    Rect, ShouldRender, Size, Style,
};

const NUM_FIELDS: usize = 4;
const HEADER_ROWS: usize = 2;

#[derive(Clone, Debug)]
struct FormProperties {
    defaults: TextFieldDefaults,
    scheme: ColourScheme,
}

#[derive(Clone, Debug)]
enum Message {
    FocusNext,
    FocusPrevious,
    ToggleScheme,
    Field(FieldMessage),
}

struct Form {
    properties: FormProperties,
    frame: Rect,
    scheme: ColourScheme,
    focus: usize,
    values: Vec<Rc<RefCell<String>>>,
    on_change: Vec<Callback<String>>,
    clear_username: Callback<()>,
    fields: Vec<TextField>,
}

impl Form {
    fn field_properties(&self, index: usize) -> TextFieldProperties {
        let value = self.values[index].borrow().clone();
        let base = TextFieldProperties::new(&self.properties.defaults)
            .content(value.clone())
            .colour_scheme(self.scheme)
            .focused(index == self.focus)
            .on_change(self.on_change[index].clone());
        match index {
            0 => base
                .title("Username")
                .placeholder("e.g. ada")
                .max_count(12)
                .trailing_icon('✕', self.clear_username.clone()),
            1 => base.title("Password").placeholder("hunter2").secure(true),
            2 => base.title("Email").placeholder("ada@example.com").error(
                !value.is_empty() && !value.contains('@'),
                "must contain '@'",
            ),
            _ => base
                .title("Licence key")
                .border_type(BorderType::Underline)
                .disabled(true),
        }
    }

    /// Rebuilds every field's properties from the current values and focus,
    /// then lays the fields out again (error lines change their height).
    fn sync_fields(&mut self) {
        let properties: Vec<TextFieldProperties> = (0..self.fields.len())
            .map(|index| self.field_properties(index))
            .collect();
        for (field, field_properties) in self.fields.iter_mut().zip(properties) {
            field.change(field_properties);
        }
        self.layout_fields();
    }

    fn layout_fields(&mut self) {
        let width = self.frame.size.width;
        let mut y = HEADER_ROWS;
        for field in self.fields.iter_mut() {
            let height = field.height();
            field.resize(Rect::new(Position::new(0, y), Size::new(width, height)));
            y += height + 1;
        }
    }

    fn base_style(&self) -> Style {
        Style::normal(
            self.properties.defaults.background_colour.resolve(self.scheme),
            self.properties.defaults.text_colour.resolve(self.scheme),
        )
    }
}

impl Component for Form {
    type Message = Message;
    type Properties = FormProperties;

    fn create(properties: Self::Properties, frame: Rect) -> Self {
        let values: Vec<Rc<RefCell<String>>> = (0..NUM_FIELDS)
            .map(|_| Rc::new(RefCell::new(String::new())))
            .collect();
        *values[3].borrow_mut() = "X4J-99Q".into();

        let on_change: Vec<Callback<String>> = values
            .iter()
            .map(|value| {
                let value = Rc::clone(value);
                Callback::from(move |content: String| {
                    *value.borrow_mut() = content;
                })
            })
            .collect();
        let clear_username = {
            let value = Rc::clone(&values[0]);
            Callback::from(move |_| value.borrow_mut().clear())
        };

        let scheme = properties.scheme;
        let mut form = Self {
            properties,
            frame,
            scheme,
            focus: 0,
            values,
            on_change,
            clear_username,
            fields: Vec::new(),
        };
        form.fields = (0..NUM_FIELDS)
            .map(|index| {
                let field_properties = form.field_properties(index);
                let size = Size::new(frame.size.width, field_properties.height());
                TextField::create(field_properties, Rect::new(Position::new(0, 0), size))
            })
            .collect();
        form.layout_fields();
        form
    }

    fn change(&mut self, properties: Self::Properties) -> ShouldRender {
        self.scheme = properties.scheme;
        self.properties = properties;
        self.sync_fields();
        ShouldRender::Yes
    }

    fn resize(&mut self, frame: Rect) -> ShouldRender {
        self.frame = frame;
        self.layout_fields();
        ShouldRender::Yes
    }

    fn update(&mut self, message: Self::Message) -> ShouldRender {
        match message {
            Message::FocusNext => {
                self.focus = (self.focus + 1) % self.fields.len();
            }
            Message::FocusPrevious => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            }
            Message::ToggleScheme => {
                self.scheme = match self.scheme {
                    ColourScheme::Light => ColourScheme::Dark,
                    ColourScheme::Dark => ColourScheme::Light,
                };
            }
            Message::Field(message) => {
                self.fields[self.focus].update(message);
            }
        }
        self.sync_fields();
        ShouldRender::Yes
    }

    fn view(&self) -> Layout {
        let width = self.frame.size.width;
        let base_style = self.base_style();

        let mut header = Canvas::new(Size::new(width, HEADER_ROWS));
        header.clear(base_style);
        header.draw_str(
            0,
            0,
            Style::bold(base_style.background, base_style.foreground),
            "formfield demo",
        );

        let mut spacer = Canvas::new(Size::new(width, 1));
        spacer.clear(base_style);

        let mut filler = Canvas::new(self.frame.size);
        filler.clear(base_style);

        let mut footer = Canvas::new(Size::new(width, 1));
        footer.clear(base_style);
        footer.draw_str(
            0,
            0,
            base_style,
            "TAB next · C-t icon/mask · A-d theme · C-x C-c quit",
        );

        let mut items = vec![fixed(HEADER_ROWS, header.into())];
        for field in self.fields.iter() {
            items.push(fixed(field.height(), field.view()));
            items.push(fixed(1, spacer.clone().into()));
        }
        items.push(auto(filler.into()));
        items.push(fixed(1, footer.into()));
        column(items)
    }

    fn has_focus(&self) -> bool {
        true
    }

    fn input_binding(&self, pressed: &[Key]) -> BindingMatch<Self::Message> {
        let mut transition = BindingTransition::Clear;
        let message = match pressed {
            &[Key::Ctrl('x'), Key::Ctrl('c')] | &[Key::Esc] => {
                transition = BindingTransition::Exit;
                None
            }
            &[Key::Ctrl('x')] => {
                transition = BindingTransition::Continue;
                None
            }
            &[Key::Char('\t')] => Some(Message::FocusNext),
            &[Key::BackTab] => Some(Message::FocusPrevious),
            &[Key::Alt('d')] => Some(Message::ToggleScheme),
            _ => {
                let child = self.fields[self.focus].input_binding(pressed);
                transition = child.transition;
                child.message.map(Message::Field)
            }
        };
        BindingMatch {
            transition,
            message,
        }
    }
}

fn main() -> formfield::Result<()> {
    env_logger::init();
    App::<Form>::new(FormProperties {
        defaults: TextFieldDefaults::default(),
        scheme: ColourScheme::Dark,
    })
    .run_event_loop(Crossterm::new()?)
}
