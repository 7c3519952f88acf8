use todolist_core::db::open_db_in_memory;
use todolist_core::{LaunchService, RepoError, SettingsRepository, SqliteSettingsRepository};

#[test]
fn onboarding_is_shown_until_completed() {
    let conn = open_db_in_memory().unwrap();
    let service = LaunchService::new(SqliteSettingsRepository::new(&conn));

    assert!(service.on_launch().unwrap().show_onboarding);
    service.complete_onboarding().unwrap();
    assert!(!service.on_launch().unwrap().show_onboarding);
    service.complete_onboarding().unwrap();
    assert!(!service.on_launch().unwrap().show_onboarding);
}

#[test]
fn bool_settings_roundtrip_and_overwrite() {
    let conn = open_db_in_memory().unwrap();
    let settings = SqliteSettingsRepository::new(&conn);

    assert_eq!(settings.get_bool("sound_enabled").unwrap(), None);
    settings.set_bool("sound_enabled", true).unwrap();
    assert_eq!(settings.get_bool("sound_enabled").unwrap(), Some(true));
    settings.set_bool("sound_enabled", false).unwrap();
    assert_eq!(settings.get_bool("sound_enabled").unwrap(), Some(false));
}

#[test]
fn corrupted_bool_setting_is_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO settings (key, value) VALUES ('first_launch_done', 'yes');",
        [],
    )
    .unwrap();
    let service = LaunchService::new(SqliteSettingsRepository::new(&conn));

    assert!(matches!(
        service.on_launch().unwrap_err(),
        RepoError::InvalidData(_)
    ));
}
