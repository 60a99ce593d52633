use bevy::prelude::*;
use bevy_visema_lipsync::{
    AudioEnded, AudioReady, AudioStarted, LipSyncEnabled, LipSyncResource, MouthChannelClaim,
    MouthParams, VisemaLipSyncPlugin,
};
use visema_lipsync_core::{Config, LipSyncEngine, ProviderOptions, SessionStatus};
use visema_test_fixtures::{load_sequence, ScriptedProvider};

fn test_app() -> App {
    let mut app = App::new();
    // Scripted engine inserted before the plugin wins over the default
    let seq = load_sequence("mi").expect("mi fixture");
    app.insert_resource(LipSyncResource(LipSyncEngine::new(
        Config::default(),
        Box::new(ScriptedProvider::new(seq)),
    )));
    app.add_plugins(MinimalPlugins)
        .add_plugins(VisemaLipSyncPlugin);
    app
}

#[test]
fn plugin_inserts_engine_and_sink_resources() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(VisemaLipSyncPlugin);

    assert!(app.world().get_resource::<LipSyncResource>().is_some());
    assert!(app.world().get_resource::<MouthParams>().is_some());
    assert!(app.world().get_resource::<MouthChannelClaim>().is_some());
}

/// it should write nothing and hold no claim while the engine is idle
#[test]
fn idle_engine_leaves_host_parameters_alone() {
    let mut app = test_app();
    app.update();
    app.update();

    let params = app.world().resource::<MouthParams>();
    assert!(params.map.is_empty());
    let claim = app.world().resource::<MouthChannelClaim>();
    assert!(claim.active.is_none());
}

#[test]
fn lifecycle_events_drive_the_engine() {
    let mut app = test_app();

    app.world_mut().send_event(AudioReady {
        text: "mi".to_string(),
        duration: 0.25,
        options: ProviderOptions::default(),
    });
    app.update();
    {
        let engine = app.world().resource::<LipSyncResource>();
        assert_eq!(engine.0.status(), SessionStatus::Armed);
    }

    app.world_mut().send_event(AudioStarted);
    app.update();
    {
        let engine = app.world().resource::<LipSyncResource>();
        assert_eq!(engine.0.status(), SessionStatus::Playing);
    }

    app.world_mut().send_event(AudioEnded);
    app.update();
    let engine = app.world().resource::<LipSyncResource>();
    assert_eq!(engine.0.status(), SessionStatus::Idle);
}

/// it should stage exactly the nine mouth channels while playing, with a claim
#[test]
fn playing_engine_claims_and_writes_the_mouth_channels() {
    let mut app = test_app();

    app.world_mut().send_event(AudioReady {
        text: "mi".to_string(),
        duration: 0.25,
        options: ProviderOptions::default(),
    });
    app.world_mut().send_event(AudioStarted);
    app.update();
    app.update();

    let params = app.world().resource::<MouthParams>();
    assert_eq!(params.map.len(), 9);
    for key in params.map.keys() {
        assert!(key.starts_with("Param"), "unexpected parameter {key}");
    }

    let claim = app.world().resource::<MouthChannelClaim>();
    let claim = claim.active.expect("claim while playing");
    assert_eq!(claim.params.len(), 9);

    // Ending playback releases the claim and clears the staged writes
    app.world_mut().send_event(AudioEnded);
    app.update();
    let params = app.world().resource::<MouthParams>();
    assert!(params.map.is_empty());
    let claim = app.world().resource::<MouthChannelClaim>();
    assert!(claim.active.is_none());
}

/// it should drop the session and release the mouth when the feature is disabled
#[test]
fn disabling_the_feature_releases_the_mouth() {
    let mut app = test_app();

    app.world_mut().send_event(AudioReady {
        text: "mi".to_string(),
        duration: 0.25,
        options: ProviderOptions::default(),
    });
    app.world_mut().send_event(AudioStarted);
    app.update();
    assert!(app
        .world()
        .resource::<MouthChannelClaim>()
        .active
        .is_some());

    app.world_mut().send_event(LipSyncEnabled { enabled: false });
    app.update();

    let engine = app.world().resource::<LipSyncResource>();
    assert_eq!(engine.0.status(), SessionStatus::Idle);
    assert!(!engine.0.is_enabled());
    assert!(app.world().resource::<MouthParams>().map.is_empty());
    assert!(app
        .world()
        .resource::<MouthChannelClaim>()
        .active
        .is_none());
}
