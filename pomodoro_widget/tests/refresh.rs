use pomodoro_widget::{JsonFileStore, MemoryHost, WidgetPresenter};
use types::{BackgroundStyle, LaunchFlag, WidgetId};

#[test]
fn test_refresh_from_widget_data_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "widget_data.json",
            r#"{
                "pomo_status": "Quick Recharge",
                "pomo_time": "04:59",
                "pomo_is_running": true
            }"#,
        )?;
        let store =
            JsonFileStore::new(jail.directory().join("widget_data.json"));
        let presenter = WidgetPresenter::new(store, MemoryHost::new());

        let summary = presenter.on_refresh(&[WidgetId(11), WidgetId(12)]);

        assert_eq!(summary.instances_updated, 2);
        let presentation = presenter.host().presentation(WidgetId(12)).unwrap();
        assert_eq!(presentation.background, BackgroundStyle::BreakShort);
        assert_eq!(presentation.background_resource, "rounded_blue_bg");
        assert_eq!(presentation.display_text(), "quick recharge 04:59");
        assert_eq!(
            presentation.on_click.launch_flags,
            vec![LaunchFlag::SingleTop, LaunchFlag::ClearTop]
        );
        Ok(())
    });
}

#[test]
fn test_rewritten_file_is_picked_up_on_next_refresh() {
    figment::Jail::expect_with(|jail| {
        let path = jail.directory().join("widget_data.json");
        jail.create_file(
            "widget_data.json",
            r#"{
                "pomo_status": "Focus",
                "pomo_time": "25:00",
                "pomo_is_running": true
            }"#,
        )?;
        let presenter =
            WidgetPresenter::new(JsonFileStore::new(&path), MemoryHost::new());

        presenter.on_refresh(&[WidgetId(1)]);
        assert_eq!(
            presenter.host().presentation(WidgetId(1)).unwrap().background,
            BackgroundStyle::Focus
        );

        jail.create_file(
            "widget_data.json",
            r#"{
                "pomo_status": "Focus",
                "pomo_time": "17:42",
                "pomo_is_running": false
            }"#,
        )?;
        presenter.on_refresh(&[WidgetId(1)]);

        let presentation = presenter.host().presentation(WidgetId(1)).unwrap();
        assert_eq!(presentation.background, BackgroundStyle::Paused);
        assert_eq!(presentation.display_text(), "focus 17:42");
        Ok(())
    });
}

#[test]
fn test_corrupt_file_renders_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("widget_data.json", "{ not json")?;
        let presenter = WidgetPresenter::new(
            JsonFileStore::new(jail.directory().join("widget_data.json")),
            MemoryHost::new(),
        );

        let summary = presenter.on_refresh(&[WidgetId(4)]);

        assert_eq!(summary.instances_updated, 1);
        let presentation = presenter.host().presentation(WidgetId(4)).unwrap();
        assert_eq!(presentation.background, BackgroundStyle::Paused);
        assert_eq!(presentation.display_text(), "focus 25:00");
        Ok(())
    });
}

#[test]
fn test_non_object_file_renders_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("widget_data.json", r#"["focus", "25:00", true]"#)?;
        let presenter = WidgetPresenter::new(
            JsonFileStore::new(jail.directory().join("widget_data.json")),
            MemoryHost::new(),
        );

        presenter.on_refresh(&[WidgetId(4)]);

        assert_eq!(
            presenter.host().presentation(WidgetId(4)).unwrap().status_text,
            "focus"
        );
        Ok(())
    });
}
