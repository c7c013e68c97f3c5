//! Dragging, resizing, click-to-front and hit-testing through full frames.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tessera::{
        CursorIcon, PersistedWindow, SurfaceId, Ui, WindowStore,
        geom::{Point, Rect},
        testing::Harness,
    };

    fn window(ui: &mut Ui<'_>, name: &str) -> tessera::Result<()> {
        let r = ui.begin_window(name, None)?;
        if r.visible {
            ui.text(name)?;
        }
        ui.end_window()
    }

    /// A harness with window "W" at (10, 10, 300, 200) and, optionally, "V"
    /// cascaded behind it at (30, 30).
    fn setup(second: bool) -> tessera::Result<(Harness, SurfaceId)> {
        let mut h = Harness::default();
        h.gui.context_mut().set_store(WindowStore {
            windows: vec![PersistedWindow::new(
                "W",
                Rect::new(10.0, 10.0, 300.0, 200.0),
                true,
            )],
        });
        let s = h.add_surface("main", move |ui| {
            window(ui, "W")?;
            if second {
                window(ui, "V")?;
            }
            Ok(())
        });
        h.frame()?;
        Ok((h, s))
    }

    fn rect(h: &Harness, s: SurfaceId, name: &str) -> Option<Rect> {
        h.window(s, name).map(|w| w.rect())
    }

    fn depth(h: &Harness, s: SurfaceId, name: &str) -> Option<u32> {
        h.window(s, name).map(|w| w.depth())
    }

    #[test]
    fn header_drag_moves_window() -> tessera::Result<()> {
        let (mut h, s) = setup(false)?;
        h.pointer_down(Point::new(20.0, 15.0))?;
        assert!(h.context().interaction().is_move());
        h.drag_to(Point::new(70.0, 15.0))?;
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(60.0, 10.0, 300.0, 200.0)));
        h.drag_to(Point::new(70.0, 45.0))?;
        h.pointer_up(Point::new(70.0, 45.0))?;
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(60.0, 40.0, 300.0, 200.0)));
        assert_eq!(depth(&h, s, "W"), Some(0));
        assert!(!h.context().interaction().is_locked());

        // Released: further motion is ignored.
        h.drag_to(Point::new(400.0, 400.0))?;
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(60.0, 40.0, 300.0, 200.0)));
        Ok(())
    }

    #[test]
    fn drag_keeps_header_on_screen() -> tessera::Result<()> {
        let (mut h, s) = setup(false)?;
        h.pointer_down(Point::new(20.0, 15.0))?;
        h.drag_to(Point::new(2000.0, 2000.0))?;
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(500.0, 575.0, 300.0, 200.0)));
        h.drag_to(Point::new(-2000.0, -2000.0))?;
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(0.0, 0.0, 300.0, 200.0)));
        Ok(())
    }

    #[test]
    fn resize_clamps_to_minimum() -> tessera::Result<()> {
        let (mut h, s) = setup(false)?;
        let handle = h.window(s, "W").map(|w| w.resize_handle());
        assert_eq!(handle, Some(Rect::new(289.0, 189.0, 20.0, 20.0)));

        h.pointer_down(Point::new(300.0, 200.0))?;
        assert!(h.context().interaction().is_resize());
        h.drag_to(Point::new(-100.0, -200.0))?;
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(10.0, 10.0, 48.0, 48.0)));
        h.drag_to(Point::new(5000.0, 5000.0))?;
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(10.0, 10.0, 752.0, 552.0)));
        h.pointer_up(Point::new(5000.0, 5000.0))?;
        assert!(!h.context().interaction().is_locked());
        Ok(())
    }

    #[test]
    fn click_brings_window_to_front() -> tessera::Result<()> {
        let (mut h, s) = setup(true)?;
        assert_eq!(depth(&h, s, "W"), Some(0));
        assert_eq!(depth(&h, s, "V"), Some(1));

        // Inside V only: body click, no drag.
        h.pointer_down(Point::new(320.0, 150.0))?;
        assert!(!h.context().interaction().is_locked());
        assert_eq!(depth(&h, s, "V"), Some(0));
        assert_eq!(depth(&h, s, "W"), Some(1));
        h.pointer_up(Point::new(320.0, 150.0))?;

        // The overlap now belongs to V.
        let overlap = Point::new(100.0, 100.0);
        assert_eq!(h.context().window_at(overlap), h.context().find_window(s, "V"));
        Ok(())
    }

    #[test]
    fn background_window_moves_after_promotion() -> tessera::Result<()> {
        let (mut h, s) = setup(true)?;
        // V's header, right of W.
        h.pointer_down(Point::new(320.0, 35.0))?;
        assert!(h.context().interaction().is_move());
        assert_eq!(depth(&h, s, "V"), Some(0));
        h.drag_to(Point::new(330.0, 45.0))?;
        assert_eq!(rect(&h, s, "V"), Some(Rect::new(40.0, 40.0, 300.0, 200.0)));
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(10.0, 10.0, 300.0, 200.0)));
        h.pointer_up(Point::new(330.0, 45.0))?;
        Ok(())
    }

    #[test]
    fn covered_header_does_not_start_drag() -> tessera::Result<()> {
        let (mut h, s) = setup(true)?;
        // V's header at (100, 35) lies under W's body, and W is on top.
        h.pointer_down(Point::new(100.0, 35.0))?;
        assert!(!h.context().interaction().is_locked());
        assert_eq!(depth(&h, s, "W"), Some(0));
        Ok(())
    }

    #[test]
    fn collapsed_window_only_catches_header() -> tessera::Result<()> {
        let (mut h, s) = setup(true)?;
        h.backend.click("\u{25bc}");
        h.frame()?;
        assert_eq!(h.window(s, "W").map(|w| w.is_content_active()), Some(false));

        // Former body of W, outside V.
        assert_eq!(h.context().window_at(Point::new(20.0, 100.0)), None);
        // Former body of W, over V.
        assert_eq!(
            h.context().window_at(Point::new(100.0, 100.0)),
            h.context().find_window(s, "V")
        );
        // W's header still catches clicks.
        assert_eq!(
            h.context().window_at(Point::new(200.0, 20.0)),
            h.context().find_window(s, "W")
        );
        Ok(())
    }

    #[test]
    fn foldout_click_does_not_start_drag() -> tessera::Result<()> {
        let (mut h, _) = setup(false)?;
        h.backend.click("\u{25bc}");
        h.pointer_down(Point::new(15.0, 15.0))?;
        assert!(!h.context().interaction().is_locked());
        Ok(())
    }

    #[test]
    fn cursor_follows_hover() -> tessera::Result<()> {
        let (mut h, _) = setup(false)?;
        h.move_to(Point::new(100.0, 20.0))?;
        assert_eq!(h.backend.cursor(), Some(CursorIcon::Grab));
        h.move_to(Point::new(100.0, 100.0))?;
        assert_eq!(h.backend.cursor(), Some(CursorIcon::Default));
        h.move_to(Point::new(300.0, 200.0))?;
        assert_eq!(h.backend.cursor(), Some(CursorIcon::Grab));
        Ok(())
    }

    #[test]
    fn cancel_abandons_drag() -> tessera::Result<()> {
        let (mut h, s) = setup(false)?;
        h.pointer_down(Point::new(20.0, 15.0))?;
        h.gui.context_mut().cancel_interaction();
        h.drag_to(Point::new(120.0, 115.0))?;
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(10.0, 10.0, 300.0, 200.0)));
        Ok(())
    }

    #[test]
    fn lock_is_shared_across_surfaces() -> tessera::Result<()> {
        let (mut h, s) = setup(false)?;
        let t = h.add_surface("other", |ui| window(ui, "Far"));
        h.frame()?;
        let far = rect(&h, t, "Far");
        assert_eq!(far, Some(Rect::new(30.0, 30.0, 300.0, 200.0)));

        // Drag W; Far must not move even though the pointer crosses it.
        h.pointer_down(Point::new(20.0, 15.0))?;
        h.drag_to(Point::new(60.0, 55.0))?;
        assert_eq!(rect(&h, t, "Far"), far);
        assert_eq!(rect(&h, s, "W"), Some(Rect::new(50.0, 50.0, 300.0, 200.0)));
        h.pointer_up(Point::new(60.0, 55.0))?;
        Ok(())
    }
}
