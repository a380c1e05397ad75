#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::locals::*;
    use crate::scope::*;
    use crate::signal::*;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = std::rc::Rc::new(std::cell::RefCell::new(false));

        let called_clone = called.clone();
        sig.subscribe(move |_| {
            *called_clone.borrow_mut() = true;
        });

        sig.set(42);
        assert!(*called.borrow());
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let hits = std::rc::Rc::new(std::cell::RefCell::new(0));

        let hits_clone = hits.clone();
        let id = sig.subscribe(move |_| {
            *hits_clone.borrow_mut() += 1;
        });

        sig.set(1);
        sig.unsubscribe(id);
        sig.set(2);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_signal_reentrant_subscriber() {
        // A subscriber that reads and unsubscribes itself must not panic.
        let sig = signal(0);
        let id_slot = std::rc::Rc::new(std::cell::RefCell::new(None));

        let sig2 = sig.clone();
        let id_slot2 = id_slot.clone();
        let id = sig.subscribe(move |v| {
            assert_eq!(sig2.get(), *v);
            if let Some(id) = id_slot2.borrow_mut().take() {
                sig2.unsubscribe(id);
            }
        });
        *id_slot.borrow_mut() = Some(id);

        sig.set(7);
        sig.set(8); // subscriber already gone
        assert_eq!(sig.get(), 8);
    }

    #[test]
    fn test_watch_released_with_scope() {
        let sig = signal(0);
        let hits = std::rc::Rc::new(std::cell::RefCell::new(0));

        let scope = Scope::new();
        scope.run(|| {
            let hits = hits.clone();
            let _ = sig.watch(move |_| {
                *hits.borrow_mut() += 1;
            });
        });

        sig.set(1);
        assert_eq!(*hits.borrow(), 1);

        scope.dispose();
        sig.set(2);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = std::rc::Rc::new(std::cell::RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_scoped_effect_cleanup() {
        let cleaned_up = std::rc::Rc::new(std::cell::RefCell::new(false));

        let scope = Scope::new();
        scope.run(|| {
            let cleaned_up = cleaned_up.clone();
            scoped_effect(move || {
                Box::new(move || {
                    *cleaned_up.borrow_mut() = true;
                })
            });
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::from_hex("#34d399").css(), "#34d399");
        assert_eq!(
            Color(52, 211, 153, 51).css(),
            format!("rgba(52, 211, 153, {:.3})", 51.0f32 / 255.0)
        );
    }

    #[test]
    fn test_theme_override_and_restore() {
        let base = theme().background;

        let light = Theme {
            background: Color::from_hex("#fafaf9"),
            ..Theme::default()
        };
        with_theme(light, || {
            assert_eq!(theme().background, Color::from_hex("#fafaf9"));
        });

        assert_eq!(theme().background, base);
    }
}
