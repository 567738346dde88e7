use super::*;

/// Tests namespace values for each game version.
///
/// Expected: `{kind}-{region}` for retail, `{kind}-classic-{region}` for classic and
/// `{kind}-classic1x-{region}` for classic era
#[test]
fn namespace_follows_game_version() {
    let mut config = Config::for_mock("http://127.0.0.1:1");

    config.game_version = GameVersion::Retail;
    let retail = client_for(&config);
    config.game_version = GameVersion::Classic;
    let classic = client_for(&config);
    config.game_version = GameVersion::ClassicEra;
    let era = client_for(&config);

    assert_eq!(retail.namespace(Namespace::Profile), "profile-us");
    assert_eq!(retail.namespace(Namespace::Static), "static-us");
    assert_eq!(classic.namespace(Namespace::Profile), "profile-classic-us");
    assert_eq!(era.namespace(Namespace::Static), "static-classic1x-us");
}
