pub mod game_common;
pub mod runner_scene;

use crate::runner::GameSnapshot;
use ratatui::Frame;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, snap: &GameSnapshot) {
    let size = frame.size();
    runner_scene::render_runner_scene(frame, size, snap);
}
