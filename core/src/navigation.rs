use std::fmt;

/// Screens the presentation layer can ask the host to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Send,
    Receive,
    Proposals,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Send => write!(f, "send"),
            Screen::Receive => write!(f, "receive"),
            Screen::Proposals => write!(f, "proposals"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Navigation and feedback surface provided by the host.
///
/// Methods take `&self` so one navigator can be shared between screens;
/// implementations use interior mutability where they need it.
pub trait Navigator {
    /// Present `screen` modally over the current one.
    fn present(&self, screen: Screen);
    /// Push `screen` onto the navigation stack.
    fn push(&self, screen: Screen);
    /// Dismiss the screen that issued the call.
    fn dismiss(&self);
    fn show_banner(&self, kind: BannerKind, text: &str);
    fn show_alert(&self, title: &str, message: &str, ok_label: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records every navigator call for assertions.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum NavCall {
        Present(Screen),
        Push(Screen),
        Dismiss,
        Banner(BannerKind, String),
        Alert(String, String, String),
    }

    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub(crate) calls: RefCell<Vec<NavCall>>,
    }

    impl RecordingNavigator {
        pub(crate) fn take(&self) -> Vec<NavCall> {
            std::mem::take(&mut *self.calls.borrow_mut())
        }
    }

    impl Navigator for RecordingNavigator {
        fn present(&self, screen: Screen) {
            self.calls.borrow_mut().push(NavCall::Present(screen));
        }

        fn push(&self, screen: Screen) {
            self.calls.borrow_mut().push(NavCall::Push(screen));
        }

        fn dismiss(&self) {
            self.calls.borrow_mut().push(NavCall::Dismiss);
        }

        fn show_banner(&self, kind: BannerKind, text: &str) {
            self.calls
                .borrow_mut()
                .push(NavCall::Banner(kind, text.to_string()));
        }

        fn show_alert(&self, title: &str, message: &str, ok_label: &str) {
            self.calls.borrow_mut().push(NavCall::Alert(
                title.to_string(),
                message.to_string(),
                ok_label.to_string(),
            ));
        }
    }
}
