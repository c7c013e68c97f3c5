//! Window resolution, pruning, pairing errors and the frame barrier.

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;
    use tessera::{
        Config, Context, Error, FrameInput, FrameLifecycle, IdentityMode, PersistedWindow, Ui,
        WindowStore,
        geom::{Expanse, Rect},
        testing::{Harness, ScriptBackend},
    };

    fn window(ui: &mut Ui<'_>, name: &str) -> tessera::Result<()> {
        ui.begin_window(name, None)?;
        ui.end_window()
    }

    #[test]
    fn redeclaration_is_idempotent() -> tessera::Result<()> {
        let mut h = Harness::default();
        let s = h.add_surface("main", |ui| window(ui, "A"));
        h.frame()?;
        let first = h.window(s, "A").map(|w| w.rect());
        for _ in 0..5 {
            h.frame()?;
            assert_eq!(h.window(s, "A").map(|w| w.rect()), first);
        }
        assert_eq!(first, Some(Rect::new(20.0, 20.0, 300.0, 200.0)));
        Ok(())
    }

    #[test]
    fn new_windows_cascade_across_surfaces() -> tessera::Result<()> {
        let mut h = Harness::default();
        let a = h.add_surface("one", |ui| {
            window(ui, "A")?;
            window(ui, "B")
        });
        let b = h.add_surface("two", |ui| window(ui, "C"));
        h.frame()?;

        let rect = |s, n| h.window(s, n).map(|w| w.rect().tl);
        assert_eq!(rect(a, "A"), Some((20.0, 20.0).into()));
        assert_eq!(rect(a, "B"), Some((40.0, 40.0).into()));
        assert_eq!(rect(b, "C"), Some((60.0, 60.0).into()));
        Ok(())
    }

    #[test]
    fn depths_are_contiguous_after_each_frame() -> tessera::Result<()> {
        let mut h = Harness::default();
        let a = h.add_surface("one", |ui| {
            window(ui, "A")?;
            window(ui, "B")
        });
        let b = h.add_surface("two", |ui| {
            window(ui, "C")?;
            window(ui, "D")
        });
        h.frame()?;

        let depth = |s, n| h.window(s, n).map(|w| w.depth());
        assert_eq!(depth(a, "A"), Some(0));
        let mut all: Vec<u32> = h
            .context()
            .surfaces()
            .windows()
            .map(|(_, w)| w.depth())
            .collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3]);
        // Ties between surfaces go to the older window.
        assert!(depth(b, "C") < depth(a, "B"));
        Ok(())
    }

    #[test]
    fn undeclared_windows_are_pruned() -> tessera::Result<()> {
        let show = Rc::new(Cell::new(true));
        let flag = show.clone();
        let mut h = Harness::default();
        let s = h.add_surface("main", move |ui| {
            window(ui, "A")?;
            if flag.get() {
                window(ui, "B")?;
            }
            Ok(())
        });
        h.frame()?;
        assert_eq!(h.context().surface(s).map(|s| s.windows().len()), Some(2));
        show.set(false);
        h.frame()?;
        assert_eq!(h.context().surface(s).map(|s| s.windows().len()), Some(1));
        assert!(h.window(s, "B").is_none());
        Ok(())
    }

    /// A surface that declares "A" then "B", or only "B" once `skip_a` is set.
    fn conditional(h: &mut Harness, skip_a: Rc<Cell<bool>>) -> tessera::SurfaceId {
        h.add_surface("main", move |ui| {
            if !skip_a.get() {
                window(ui, "A")?;
            }
            window(ui, "B")
        })
    }

    #[test]
    fn ordinal_identity_reuses_slots() -> tessera::Result<()> {
        let skip = Rc::new(Cell::new(false));
        let mut h = Harness::default();
        let s = conditional(&mut h, skip.clone());
        h.frame()?;
        skip.set(true);
        h.frame()?;
        // "B" now occupies slot 0 and inherits A's descriptor.
        let only = &h.context().surface(s).map(|s| s.windows().to_vec()).unwrap_or_default();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name(), "A");
        assert_eq!(only[0].rect().tl, (20.0, 20.0).into());
        Ok(())
    }

    #[test]
    fn named_identity_follows_names() -> tessera::Result<()> {
        let skip = Rc::new(Cell::new(false));
        let config = Config {
            identity: IdentityMode::Named,
            ..Config::default()
        };
        let mut h = Harness::builder().config(config).build();
        let s = conditional(&mut h, skip.clone());
        h.frame()?;
        let b = h.window(s, "B").map(|w| (w.rect(), w.guid()));
        skip.set(true);
        h.frame()?;
        assert_eq!(h.window(s, "B").map(|w| (w.rect(), w.guid())), b);
        assert!(h.window(s, "A").is_none());

        // "A" comes back as a fresh window.
        skip.set(false);
        h.frame()?;
        assert_eq!(h.window(s, "B").map(|w| (w.rect(), w.guid())), b);
        assert!(h.window(s, "A").is_some());
        Ok(())
    }

    #[test]
    fn saved_state_seeds_first_declaration_only() -> tessera::Result<()> {
        let mut h = Harness::default();
        h.gui.context_mut().set_store(WindowStore {
            windows: vec![PersistedWindow::new(
                "Shared",
                Rect::new(100.0, 120.0, 250.0, 150.0),
                false,
            )],
        });
        let a = h.add_surface("one", |ui| window(ui, "Shared"));
        let b = h.add_surface("two", |ui| window(ui, "Shared"));
        h.frame()?;

        let wa = h.window(a, "Shared").cloned();
        let wb = h.window(b, "Shared").cloned();
        assert_eq!(wa.as_ref().map(|w| w.rect()), Some(Rect::new(100.0, 120.0, 250.0, 150.0)));
        assert_eq!(wa.as_ref().map(|w| w.is_content_active()), Some(false));
        assert_eq!(wb.as_ref().map(|w| w.rect()), Some(Rect::new(120.0, 140.0, 300.0, 200.0)));
        assert_eq!(wb.as_ref().map(|w| w.is_content_active()), Some(true));
        Ok(())
    }

    #[test]
    fn pairing_errors() -> tessera::Result<()> {
        let mut h = Harness::default();
        h.add_surface("nested", |ui| {
            ui.begin_window("A", None)?;
            ui.begin_window("B", None)?;
            ui.end_window()
        });
        assert_eq!(h.frame(), Err(Error::WindowAlreadyOpen));

        let mut h = Harness::default();
        h.add_surface("end", |ui| ui.end_window());
        assert_eq!(h.frame(), Err(Error::NoOpenWindow));

        let mut h = Harness::default();
        h.add_surface("loose", |ui| ui.text("hello"));
        assert_eq!(h.frame(), Err(Error::ControlOutsideWindow));

        let mut h = Harness::default();
        h.add_surface("after", |ui| {
            window(ui, "A")?;
            ui.button("late").map(|_| ())
        });
        assert_eq!(h.frame(), Err(Error::ControlOutsideWindow));
        Ok(())
    }

    #[test]
    fn unclosed_window_is_reported_and_recovered() -> tessera::Result<()> {
        let broken = Rc::new(Cell::new(true));
        let flag = broken.clone();
        let mut h = Harness::default();
        let s = h.add_surface("main", move |ui| {
            ui.begin_window("A", None)?;
            if !flag.get() {
                ui.end_window()?;
            }
            Ok(())
        });
        assert_eq!(h.frame(), Err(Error::UnclosedWindow("A".into())));
        assert_eq!(h.context().frames(), 1);
        broken.set(false);
        h.frame()?;
        assert!(h.window(s, "A").is_some());
        Ok(())
    }

    #[test]
    fn closed_windows_keep_their_slot() -> tessera::Result<()> {
        let open = Rc::new(Cell::new(true));
        let flag = open.clone();
        let mut h = Harness::default();
        let s = h.add_surface("main", move |ui| {
            let mut o = flag.get();
            let r = ui.begin_window("Closable", Some(&mut o))?;
            flag.set(o);
            if r.visible {
                ui.text("body")?;
            }
            ui.end_window()?;
            window(ui, "Other")
        });
        h.frame()?;
        h.backend.click("x");
        h.frame()?;
        assert!(!open.get());
        let w = h.window(s, "Closable").cloned();
        assert_eq!(w.as_ref().map(|w| w.is_open()), Some(false));
        assert_eq!(h.context().surface(s).map(|s| s.windows().len()), Some(2));

        h.frame()?;
        assert!(!h.backend.labels().contains(&"body"));
        assert!(!h.backend.labels().contains(&"Closable"));
        let centre = (100.0, 100.0).into();
        assert_ne!(
            h.context().window_at(centre),
            h.context().find_window(s, "Closable")
        );

        open.set(true);
        h.frame()?;
        assert!(h.backend.labels().contains(&"body"));
        Ok(())
    }

    #[test]
    fn barrier_waits_for_every_enabled_surface() -> tessera::Result<()> {
        let mut h = Harness::default();
        let a = h.add_surface("one", |ui| window(ui, "A"));
        let b = h.add_surface("two", |ui| window(ui, "B"));
        let input = FrameInput::new(Expanse::new(800.0, 600.0));
        let mut backend = ScriptBackend::new();

        h.gui.run_surface(b, &input, &mut backend)?;
        assert_eq!(h.context().frames(), 0);
        h.gui.run_surface(a, &input, &mut backend)?;
        assert_eq!(h.context().frames(), 1);

        h.gui.set_enabled(b, false)?;
        h.gui.run_surface(a, &input, &mut backend)?;
        assert_eq!(h.context().frames(), 2);
        // The disabled surface's window still exists.
        assert!(h.window(b, "B").is_some());

        h.gui.remove_surface(b)?;
        assert!(h.window(b, "B").is_none());
        assert_eq!(
            h.gui.run_surface(b, &input, &mut backend),
            Err(Error::UnknownSurface(b))
        );
        Ok(())
    }

    #[test]
    fn removing_the_last_pending_surface_ends_the_frame() -> tessera::Result<()> {
        let mut h = Harness::default();
        let a = h.add_surface("one", |ui| window(ui, "A"));
        let b = h.add_surface("two", |ui| window(ui, "B"));
        let c = h.add_surface("three", |ui| window(ui, "C"));
        let input = FrameInput::new(Expanse::new(800.0, 600.0));
        let mut backend = ScriptBackend::new();

        h.gui.run_surface(a, &input, &mut backend)?;
        h.gui.run_surface(b, &input, &mut backend)?;
        assert_eq!(h.context().frames(), 0);
        h.gui.remove_surface(c)?;
        assert_eq!(h.context().frames(), 1);

        // The next frame still waits for both remaining surfaces.
        h.gui.run_surface(a, &input, &mut backend)?;
        assert_eq!(h.context().frames(), 1);
        h.gui.run_surface(b, &input, &mut backend)?;
        assert_eq!(h.context().frames(), 2);
        Ok(())
    }

    #[test]
    fn reentrant_pass_is_busy() {
        let mut ctx = Context::default();
        let s = ctx.add_surface("main");
        let input = FrameInput::new(Expanse::new(100.0, 100.0));
        assert_eq!(ctx.begin_pass(s, &input), Ok(()));
        assert_eq!(ctx.begin_pass(s, &input), Err(Error::SurfaceBusy(s)));
        assert_eq!(ctx.end_pass(s), Ok(()));
        assert_eq!(ctx.begin_pass(s, &input), Ok(()));
    }

    #[test]
    fn missing_style_is_rejected() -> tessera::Result<()> {
        let mut h = Harness::default();
        h.add_surface("main", |ui| ui.set_style(tessera::Skin::new("empty")));
        assert!(matches!(h.frame(), Err(Error::MissingStyle(_))));
        Ok(())
    }

    #[test]
    fn dump_lists_windows() -> tessera::Result<()> {
        let mut h = Harness::default();
        h.add_surface("main", |ui| {
            window(ui, "Alpha")?;
            window(ui, "Beta")
        });
        h.frame()?;
        let table = h.context().dump();
        assert!(table.contains("Alpha"));
        assert!(table.contains("Beta"));
        assert!(table.contains("main"));
        Ok(())
    }
}
