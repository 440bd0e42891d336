//! Tests for the session controller and its tick timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chroma_core::{
    Cell, ChromaGame, Color, Direction, FixedGridGenerator, GamePhase, GameView, Grid,
    GridLayout, PlayerAction, Position,
};
use chroma_shift::{Command, Flow, RenderSink, SessionController, SessionEvent};

/// What one rendered frame showed.
#[derive(Debug, Clone, PartialEq)]
struct Frame {
    phase: GamePhase,
    position: Position,
    time: String,
}

#[derive(Clone, Default)]
struct RecordingSink {
    frames: Arc<Mutex<Vec<Frame>>>,
}

impl RecordingSink {
    fn frames(&self) -> Vec<Frame> {
        self.frames.lock().expect("frames lock").clone()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, view: &GameView<'_>) -> anyhow::Result<()> {
        self.frames.lock().expect("frames lock").push(Frame {
            phase: view.phase(),
            position: view.player_position(),
            time: view.elapsed_label(),
        });
        Ok(())
    }
}

/// Left column and bottom row red, everything else blue.
fn l_shaped() -> Grid {
    let size = 10;
    let rows = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| match (x, y) {
                    (9, 9) => Cell::Goal,
                    (0, _) | (_, 9) => Cell::Paint(Color::Red),
                    _ => Cell::Paint(Color::Blue),
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("valid test grid")
}

fn game() -> ChromaGame {
    ChromaGame::new(GridLayout::default(), FixedGridGenerator::new(l_shaped()))
}

fn spawn_session(
    mut controller: SessionController<RecordingSink>,
) -> tokio::task::JoinHandle<anyhow::Result<ChromaGame>> {
    tokio::spawn(async move {
        controller.run().await?;
        Ok(controller.into_game())
    })
}

fn send(tx: &tokio::sync::mpsc::UnboundedSender<SessionEvent>, command: Command) {
    tx.send(command.into()).expect("controller alive");
}

fn step(direction: Direction) -> Command {
    Command::Action(PlayerAction::Move(direction))
}

fn send_winning_path(tx: &tokio::sync::mpsc::UnboundedSender<SessionEvent>) {
    for _ in 0..9 {
        send(tx, step(Direction::Down));
    }
    for _ in 0..9 {
        send(tx, step(Direction::Right));
    }
}

#[tokio::test(start_paused = true)]
async fn test_three_ticks_read_point_three() {
    let sink = RecordingSink::default();
    let controller = SessionController::new(game(), sink.clone());
    let tx = controller.sender();
    let task = spawn_session(controller);

    send(&tx, Command::Start);
    tokio::time::sleep(Duration::from_millis(350)).await;
    send(&tx, Command::Quit);

    let game = task.await.expect("join").expect("run");
    assert_eq!(*game.session().elapsed(), Duration::from_millis(300));
    assert_eq!(
        sink.frames().last().map(|f| f.time.clone()),
        Some("0.3".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn test_win_stops_timer() {
    let sink = RecordingSink::default();
    let controller = SessionController::new(game(), sink.clone());
    let tx = controller.sender();
    let task = spawn_session(controller);

    send(&tx, Command::Start);
    tokio::time::sleep(Duration::from_millis(250)).await;
    send_winning_path(&tx);
    tokio::time::sleep(Duration::from_secs(2)).await;
    send(&tx, Command::Quit);

    let game = task.await.expect("join").expect("run");
    assert_eq!(game.phase(), GamePhase::Won);
    assert_eq!(*game.session().elapsed(), Duration::from_millis(200));
    assert_eq!(game.best_times().times(), [Duration::from_millis(200)]);

    let last = sink.frames().last().cloned().expect("frames rendered");
    assert_eq!(last.phase, GamePhase::Won);
    assert_eq!(last.position, Position::new(9, 9));
    assert_eq!(last.time, "0.2");
}

#[tokio::test(start_paused = true)]
async fn test_rapid_start_reset_keeps_single_timer() {
    let controller = SessionController::new(game(), RecordingSink::default());
    let tx = controller.sender();
    let task = spawn_session(controller);

    for _ in 0..3 {
        send(&tx, Command::Start);
        send(&tx, Command::Reset);
    }
    send(&tx, Command::Start);
    tokio::time::sleep(Duration::from_millis(350)).await;
    send(&tx, Command::Quit);

    let game = task.await.expect("join").expect("run");
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(*game.session().elapsed(), Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_idle_session_neither_ticks_nor_moves() {
    let sink = RecordingSink::default();
    let controller = SessionController::new(game(), sink.clone());
    let tx = controller.sender();
    let task = spawn_session(controller);

    send(&tx, step(Direction::Down));
    send(&tx, Command::Action(PlayerAction::CycleColor));
    tokio::time::sleep(Duration::from_secs(1)).await;
    send(&tx, Command::Quit);

    let game = task.await.expect("join").expect("run");
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(*game.session().elapsed(), Duration::ZERO);
    assert_eq!(game.session().player().position, Position::ORIGIN);
    // Only the initial frame.
    assert_eq!(sink.frames().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stale_generation_ticks_discarded() {
    let mut controller = SessionController::new(game(), RecordingSink::default());

    controller
        .handle(SessionEvent::Command(Command::Start))
        .expect("start");
    assert!(controller.timer_active());
    controller.handle(SessionEvent::Tick(0)).expect("tick");
    assert_eq!(
        *controller.game().session().elapsed(),
        Duration::from_millis(100)
    );

    controller
        .handle(SessionEvent::Command(Command::Reset))
        .expect("reset");
    assert!(!controller.timer_active());
    controller.handle(SessionEvent::Tick(0)).expect("tick");
    assert_eq!(*controller.game().session().elapsed(), Duration::ZERO);

    controller
        .handle(SessionEvent::Command(Command::Start))
        .expect("start");
    controller.handle(SessionEvent::Tick(0)).expect("stale tick");
    assert_eq!(*controller.game().session().elapsed(), Duration::ZERO);
    controller.handle(SessionEvent::Tick(1)).expect("tick");
    assert_eq!(
        *controller.game().session().elapsed(),
        Duration::from_millis(100)
    );
}

#[tokio::test(start_paused = true)]
async fn test_renders_only_on_change() {
    let sink = RecordingSink::default();
    let mut controller = SessionController::new(game(), sink.clone());

    controller.render().expect("initial render");
    controller
        .handle(SessionEvent::Command(Command::Start))
        .expect("start");
    assert_eq!(sink.frames().len(), 2);

    // (1,0) is blue; red cannot enter.
    controller.handle(step(Direction::Right).into()).expect("move");
    assert_eq!(sink.frames().len(), 2);

    controller.handle(step(Direction::Down).into()).expect("move");
    let frames = sink.frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2].position, Position::new(0, 1));
}

#[tokio::test(start_paused = true)]
async fn test_quit_ends_loop() {
    let mut controller = SessionController::new(game(), RecordingSink::default());
    assert_eq!(
        controller.handle(Command::Quit.into()).expect("quit"),
        Flow::Quit
    );
    assert_eq!(
        controller.handle(Command::Start.into()).expect("start"),
        Flow::Continue
    );
}

/// Records whether it has been dropped.
struct DropFlagSink {
    dropped: Arc<Mutex<bool>>,
}

impl RenderSink for DropFlagSink {
    fn render(&mut self, _view: &GameView<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

impl Drop for DropFlagSink {
    fn drop(&mut self) {
        *self.dropped.lock().expect("flag lock") = true;
    }
}

#[tokio::test(start_paused = true)]
async fn test_sink_outlives_loop_until_parts_released() {
    let dropped = Arc::new(Mutex::new(false));
    let sink = DropFlagSink {
        dropped: Arc::clone(&dropped),
    };
    let mut controller = SessionController::new(game(), sink);
    send(&controller.sender(), Command::Start);
    send(&controller.sender(), Command::Quit);

    controller.run().await.expect("run");
    assert!(!controller.timer_active());
    assert!(!*dropped.lock().expect("flag lock"));

    let (game, sink) = controller.into_parts();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert!(!*dropped.lock().expect("flag lock"));

    drop(sink);
    assert!(*dropped.lock().expect("flag lock"));
}
