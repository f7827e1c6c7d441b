use hearsay_codec::{
    message::{
        Ball, BallPlayer, Free, Goalie, GoaliePlayer, Intercept, Myself, Opponent, Pass, Player,
        Players, Stamina,
    },
    Codec, Config as CodecConfig, Error, Message, Vector2,
};
use hearsay_memory::{Config, Dispatcher, Memory, Tick};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn say(codec: &Codec, messages: &[Message]) -> String {
    messages
        .iter()
        .map(|message| message.encode(codec).unwrap())
        .collect()
}

#[test]
fn test_ball_and_wait() {
    init_tracing();
    let dispatcher = Dispatcher::default();
    let mut memory = Memory::default();

    let pos = Vector2::new(-20.0, 11.0);
    let vel = Vector2::new(-1.0, 2.0);
    let text = format!("b{}w", dispatcher.codec().encode_pos_vel(pos, vel).unwrap());
    let report = dispatcher.hear(&mut memory, 9, &text, 42);

    assert_eq!(report.consumed, 7);
    assert_eq!(report.messages, 2);
    assert_eq!(report.error, None);

    let (pos, vel) = dispatcher.codec().decode_pos_vel(&text[1..6]).unwrap();
    let ball = &memory.ball()[0];
    assert_eq!((ball.sender, ball.pos, ball.vel), (9, pos, vel));
    assert_eq!(memory.wait_request().len(), 1);
    assert!(memory.updated(memory.ball_tick()));
    assert!(memory.updated(memory.wait_request_tick()));
    assert!(!memory.updated(memory.pass_tick()));
}

#[test]
fn test_composite_messages() {
    init_tracing();
    let dispatcher = Dispatcher::default();
    let codec = dispatcher.codec();
    let mut memory = Memory::default();

    let ball = Ball {
        pos: Vector2::new(30.0, 0.0),
        vel: Vector2::new(2.0, 0.0),
    };
    let goalie = Goalie {
        pos: Vector2::new(51.0, 0.0),
        body: 180.0,
    };
    let text = say(
        codec,
        &[
            Pass {
                receiver: 10,
                target: Vector2::new(35.0, 5.0),
                ball,
            }
            .into(),
            GoaliePlayer {
                goalie,
                player: Player {
                    unum: 19,
                    pos: Vector2::new(45.0, -5.0),
                },
            }
            .into(),
            Myself {
                pos: Vector2::new(29.0, 1.0),
                body: 0.0,
                stamina: 4000.0,
            }
            .into(),
        ],
    );
    let report = dispatcher.hear(&mut memory, 8, &text, 3);
    assert_eq!(report.consumed, text.len());
    assert_eq!(report.messages, 3);

    assert_eq!(memory.pass()[0].receiver, 10);
    assert_eq!(memory.ball().len(), 1);
    assert_eq!(memory.goalie().len(), 1);
    let players = memory.player();
    assert_eq!(players.len(), 2);
    assert_eq!((players[0].unum, players[0].body), (19, None));
    assert_eq!(players[1].unum, 8);
    assert_eq!(players[1].body, Some(0.0));
    assert_eq!(players[1].stamina, Some(4000.0));
}

#[test]
fn test_multiple_senders_same_tick() {
    init_tracing();
    let dispatcher = Dispatcher::default();
    let codec = dispatcher.codec();
    let mut memory = Memory::default();

    let intercept = |unum| say(codec, &[Intercept { unum, cycle: 5 }.into()]);
    dispatcher.hear(&mut memory, 2, &intercept(3), 50);
    dispatcher.hear(&mut memory, 4, &intercept(20), 50);
    dispatcher.hear(&mut memory, 6, &intercept(7), 50);

    let ours: Vec<(u8, u8)> = memory
        .our_intercept()
        .iter()
        .map(|r| (r.sender, r.unum))
        .collect();
    assert_eq!(ours, vec![(2, 3), (6, 7)]);
    assert_eq!(memory.opp_intercept()[0].unum, 9);
    assert_eq!(memory.opp_intercept()[0].cycle, 4);

    // Next tick replaces only the categories heard
    dispatcher.hear(&mut memory, 2, &intercept(1), 51);
    assert_eq!(memory.our_intercept().len(), 1);
    assert_eq!(memory.opp_intercept().len(), 1);
    assert_eq!(memory.opp_intercept_tick(), Some(50));
    assert!(!memory.updated(memory.opp_intercept_tick()));
}

#[test]
fn test_malformed_stops() {
    init_tracing();
    let dispatcher = Dispatcher::default();
    let codec = dispatcher.codec();
    let mut memory = Memory::default();

    let stamina = say(codec, &[Stamina { value: 5000.0 }.into()]);
    // Truncated ball
    let text = format!("{stamina}b12w");
    let report = dispatcher.hear(&mut memory, 2, &text, 10);
    assert_eq!(report.consumed, 2);
    assert_eq!(report.messages, 1);
    assert!(matches!(report.error, Some(Error::EndOfText { .. })));
    assert_eq!(memory.stamina().len(), 1);
    assert!(memory.ball().is_empty());
    assert!(memory.wait_request().is_empty());

    // Unknown header
    let text = format!("{stamina}!");
    let report = dispatcher.hear(&mut memory, 2, &text, 11);
    assert_eq!(report.consumed, 2);
    assert!(!report.error.unwrap().is_malformed());
}

#[test]
fn test_free_text_then_ball_player() {
    init_tracing();
    let dispatcher = Dispatcher::default();
    let codec = dispatcher.codec();
    let mut memory = Memory::default();

    let text = say(
        codec,
        &[
            Free {
                text: "keep".to_string(),
            }
            .into(),
            BallPlayer {
                ball: Ball::default(),
                player: Player {
                    unum: 12,
                    pos: Vector2::new(-1.0, 1.0),
                },
                body: 90.0,
            }
            .into(),
            Opponent {
                unum: 20,
                pos: Vector2::new(5.0, 5.0),
                body: -90.0,
            }
            .into(),
        ],
    );
    let report = dispatcher.hear(&mut memory, 5, &text, 77);
    assert_eq!(report.consumed, 6 + 10 + 5);
    assert_eq!(memory.free()[0].text, "keep");
    let unums: Vec<u8> = memory.player().iter().map(|p| p.unum).collect();
    assert_eq!(unums, vec![12, 20]);
    assert_eq!(memory.player()[0].body, Some(90.0));
}

#[test]
fn test_player_history_bound() {
    let mut rng = StdRng::seed_from_u64(0);
    let dispatcher = Dispatcher::default();
    let codec = dispatcher.codec();
    let mut memory = Memory::default();

    for tick in 0..40 {
        let players = Players([Player {
            unum: rng.gen_range(1..=22),
            pos: Vector2::new(rng.gen_range(-52.5..52.5), rng.gen_range(-34.0..34.0)),
        }]);
        let report = dispatcher.hear(&mut memory, 1, &say(codec, &[players.into()]), tick);
        assert_eq!(report.error, None);
    }
    assert_eq!(memory.player().len(), 1);
    let ticks: Vec<Tick> = memory.player_history().map(|(tick, _)| *tick).collect();
    assert_eq!(ticks, (10..40).collect::<Vec<_>>());
}

#[test]
fn test_custom_config() {
    let dispatcher = Dispatcher::new(Codec::new(CodecConfig {
        stamina_max: 4000.0,
        ..CodecConfig::default()
    }));
    let mut memory = Memory::new(Config { history: 2 });

    let text = say(dispatcher.codec(), &[Stamina { value: 4000.0 }.into()]);
    assert_eq!(text, "s-");
    dispatcher.hear(&mut memory, 3, &text, 1);
    assert_eq!(memory.stamina()[0].value, 4000.0);

    for tick in 0..5 {
        let players = Players([Player {
            unum: 3,
            pos: Vector2::default(),
        }; 3]);
        dispatcher.hear(&mut memory, 3, &say(dispatcher.codec(), &[players.into()]), tick);
    }
    assert_eq!(memory.player().len(), 3);
    assert_eq!(memory.player_history().count(), 2);
}
