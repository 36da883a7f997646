use std::{
    borrow::Cow,
    fmt,
};

/// Values that can be printed by a [`RenderContext`](crate::RenderContext).
///
/// Text passes through untouched; everything else goes through its
/// [`fmt::Display`] implementation. Wrap other displayable types in
/// [`Displayed`] to print them.
pub trait ToText {
    fn to_text(&self) -> Cow<'_, str>;
}

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> Cow<'_, str> {
        (**self).to_text()
    }
}

impl ToText for str {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToText for String {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToText for Cow<'_, str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToText for char {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(String::from(*self))
    }
}

impl ToText for fmt::Arguments<'_> {
    fn to_text(&self) -> Cow<'_, str> {
        match self.as_str() {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(self.to_string()),
        }
    }
}

macro_rules! to_text_via_display {
    ($($type:ty),* $(,)?) => {
        $(
            impl ToText for $type {
                fn to_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

to_text_via_display!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

/// Prints any [`fmt::Display`] value.
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> ToText for Displayed<T> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.to_string())
    }
}
