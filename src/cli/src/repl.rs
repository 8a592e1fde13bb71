//! A line-oriented session over one running cube.

use crate::{config::Config, render};
use cube_core::{CubeState, ParseError, parse_algorithm};
use log::debug;
use std::collections::VecDeque;

/// Oldest states are dropped past this many undo steps.
pub const HISTORY_LIMIT: usize = 1000;

pub const HELP: &str = "Enter an algorithm to apply it, or one of: state, undo, reset, help, exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to show, possibly empty.
    Output(String),
    Rejected(ParseError),
    Exit,
}

#[derive(Debug, Default)]
pub struct Session {
    cube: CubeState,
    /// States before each applied algorithm, most recent last.
    history: VecDeque<CubeState>,
}

impl Session {
    #[cfg(test)]
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    fn remember(&mut self) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(self.cube);
    }

    pub fn handle(&mut self, line: &str, config: &Config) -> Reply {
        match line.trim() {
            "" => Reply::Output(String::new()),
            "exit" | "quit" => Reply::Exit,
            "help" => Reply::Output(HELP.to_owned()),
            "state" => Reply::Output(render::state(&self.cube, config)),
            "reset" => {
                self.remember();
                self.cube = CubeState::identity();
                Reply::Output("reset".to_owned())
            }
            "undo" => match self.history.pop_back() {
                Some(previous) => {
                    self.cube = previous;
                    Reply::Output(render::state(&self.cube, config))
                }
                None => Reply::Output("nothing to undo".to_owned()),
            },
            notation => match parse_algorithm(notation) {
                Ok(alg) => {
                    debug!("Session applying {alg}");
                    self.remember();
                    self.cube.apply_algorithm(&alg);
                    Reply::Output(render::state(&self.cube, config))
                }
                Err(e) => Reply::Rejected(e),
            },
        }
    }
}
