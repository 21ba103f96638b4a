use crate::domain::core::Rect;
use crate::domain::operation::Operation;
use thiserror::Error;

/// Which operand field a rectangle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Geometry of the calculator window
///
/// Row one holds the two operand fields, row two the four operation
/// buttons in binding order, row three the result label spanning the
/// whole content width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowLayout {
    pub title: String,
    pub padding: i32,
    pub field_width: i32,
    pub control_height: i32,
    pub button_width: i32,
}

impl WindowLayout {
    pub const MIN_PADDING: i32 = 0;
    pub const MAX_PADDING: i32 = 64;
    pub const MIN_FIELD_WIDTH: i32 = 40;
    pub const MAX_FIELD_WIDTH: i32 = 600;
    pub const MIN_CONTROL_HEIGHT: i32 = 16;
    pub const MAX_CONTROL_HEIGHT: i32 = 96;
    pub const MIN_BUTTON_WIDTH: i32 = 24;
    pub const MAX_BUTTON_WIDTH: i32 = 200;

    pub const DEFAULT_TITLE: &'static str = "Basic Calculator";

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.title.trim().is_empty() {
            return Err(LayoutError::EmptyTitle);
        }

        check_range("padding", self.padding, Self::MIN_PADDING, Self::MAX_PADDING)?;
        check_range(
            "field_width",
            self.field_width,
            Self::MIN_FIELD_WIDTH,
            Self::MAX_FIELD_WIDTH,
        )?;
        check_range(
            "control_height",
            self.control_height,
            Self::MIN_CONTROL_HEIGHT,
            Self::MAX_CONTROL_HEIGHT,
        )?;
        check_range(
            "button_width",
            self.button_width,
            Self::MIN_BUTTON_WIDTH,
            Self::MAX_BUTTON_WIDTH,
        )?;

        Ok(())
    }

    /// Returns a copy with every dimension clamped into range
    pub fn sanitized(&self) -> Self {
        let title = if self.title.trim().is_empty() {
            Self::DEFAULT_TITLE.to_string()
        } else {
            self.title.clone()
        };

        Self {
            title,
            padding: self.padding.clamp(Self::MIN_PADDING, Self::MAX_PADDING),
            field_width: self
                .field_width
                .clamp(Self::MIN_FIELD_WIDTH, Self::MAX_FIELD_WIDTH),
            control_height: self
                .control_height
                .clamp(Self::MIN_CONTROL_HEIGHT, Self::MAX_CONTROL_HEIGHT),
            button_width: self
                .button_width
                .clamp(Self::MIN_BUTTON_WIDTH, Self::MAX_BUTTON_WIDTH),
        }
    }

    /// Width available to controls, excluding the outer padding
    pub fn content_width(&self) -> i32 {
        let fields = 2 * self.field_width + self.padding;
        let buttons = Operation::ALL.len() as i32 * (self.button_width + self.padding) - self.padding;
        fields.max(buttons)
    }

    /// Client-area size `(width, height)` needed to show every control
    pub fn client_size(&self) -> (i32, i32) {
        let width = self.content_width() + 2 * self.padding;
        let height = 3 * self.control_height + 4 * self.padding;
        (width, height)
    }

    pub fn field_rect(&self, side: Side) -> Rect {
        let x = match side {
            Side::Left => self.padding,
            Side::Right => 2 * self.padding + self.field_width,
        };
        Rect::new(x, self.row_top(0), self.field_width, self.control_height)
    }

    pub fn button_rect(&self, operation: Operation) -> Rect {
        let index = Operation::ALL
            .iter()
            .position(|op| *op == operation)
            .unwrap_or_default() as i32;
        let x = self.padding + index * (self.button_width + self.padding);
        Rect::new(x, self.row_top(1), self.button_width, self.control_height)
    }

    pub fn result_rect(&self) -> Rect {
        Rect::new(
            self.padding,
            self.row_top(2),
            self.content_width(),
            self.control_height,
        )
    }

    fn row_top(&self, row: i32) -> i32 {
        self.padding + row * (self.control_height + self.padding)
    }
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            padding: 12,
            field_width: 120,
            control_height: 26,
            button_width: 54,
        }
    }
}

fn check_range(name: &'static str, value: i32, min: i32, max: i32) -> Result<(), LayoutError> {
    if value < min || value > max {
        return Err(LayoutError::DimensionOutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Window title must not be empty")]
    EmptyTitle,
    #[error("Layout dimension {name} is {value}, expected {min}..={max}")]
    DimensionOutOfRange {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}
