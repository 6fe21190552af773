// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UI actions as named commands
//!
//! | Action id | Command |
//! |---|---|
//! | `view-2d` / `view-3d` | `SetMode(Planar)` / `SetMode(Orbit)` |
//! | `floor-all` / `floor-{i}` | `SelectFloor(All)` / `SelectFloor(Floor(i))` |
//! | `wireframe` | `ToggleWireframe` |
//! | `viewpoint-{floor}-{index}` | `GoToViewpoint { floor, index }` |
//! | `reset-view` | `ResetView` |
//! | `zoom-in` / `zoom-out` | `ZoomIn` / `ZoomOut` |
//! | `resize-{w}x{h}` | `Resize { width, height }` |

use crate::error::CommandError;
use crate::state::{FloorSelection, ViewMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    SetMode { mode: ViewMode },
    SelectFloor { selection: FloorSelection },
    ToggleWireframe,
    GoToViewpoint { floor: usize, index: usize },
    ResetView,
    ZoomIn,
    ZoomOut,
    Resize { width: u32, height: u32 },
}

impl Command {
    /// Action id this command is parsed from
    pub fn action_id(&self) -> String {
        match self {
            Command::SetMode {
                mode: ViewMode::Planar,
            } => "view-2d".to_string(),
            Command::SetMode {
                mode: ViewMode::Orbit,
            } => "view-3d".to_string(),
            Command::SelectFloor {
                selection: FloorSelection::All,
            } => "floor-all".to_string(),
            Command::SelectFloor {
                selection: FloorSelection::Floor(i),
            } => format!("floor-{}", i),
            Command::ToggleWireframe => "wireframe".to_string(),
            Command::GoToViewpoint { floor, index } => format!("viewpoint-{}-{}", floor, index),
            Command::ResetView => "reset-view".to_string(),
            Command::ZoomIn => "zoom-in".to_string(),
            Command::ZoomOut => "zoom-out".to_string(),
            Command::Resize { width, height } => format!("resize-{}x{}", width, height),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action_id())
    }
}

fn parse_arg<T: FromStr>(action: &str, argument: &str) -> Result<T, CommandError> {
    argument.parse().map_err(|_| CommandError::BadArgument {
        action: action.to_string(),
        argument: argument.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = s.trim();

        let command = match action {
            "view-2d" => Command::SetMode {
                mode: ViewMode::Planar,
            },
            "view-3d" => Command::SetMode {
                mode: ViewMode::Orbit,
            },
            "reset-view" => Command::ResetView,
            "zoom-in" => Command::ZoomIn,
            "zoom-out" => Command::ZoomOut,
            "wireframe" => Command::ToggleWireframe,
            "floor-all" => Command::SelectFloor {
                selection: FloorSelection::All,
            },
            _ => {
                if let Some(index) = action.strip_prefix("floor-") {
                    Command::SelectFloor {
                        selection: FloorSelection::Floor(parse_arg(action, index)?),
                    }
                } else if let Some(rest) = action.strip_prefix("viewpoint-") {
                    let (floor, index) = rest.split_once('-').ok_or_else(|| {
                        CommandError::BadArgument {
                            action: action.to_string(),
                            argument: rest.to_string(),
                        }
                    })?;
                    Command::GoToViewpoint {
                        floor: parse_arg(action, floor)?,
                        index: parse_arg(action, index)?,
                    }
                } else if let Some(rest) = action.strip_prefix("resize-") {
                    let (width, height) =
                        rest.split_once('x').ok_or_else(|| CommandError::BadArgument {
                            action: action.to_string(),
                            argument: rest.to_string(),
                        })?;
                    Command::Resize {
                        width: parse_arg(action, width)?,
                        height: parse_arg(action, height)?,
                    }
                } else {
                    return Err(CommandError::UnknownAction(action.to_string()));
                }
            }
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_actions() {
        assert_eq!(
            "view-2d".parse(),
            Ok(Command::SetMode {
                mode: ViewMode::Planar
            })
        );
        assert_eq!("wireframe".parse(), Ok(Command::ToggleWireframe));
        assert_eq!(" zoom-out ".parse(), Ok(Command::ZoomOut));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(
            "floor-5".parse(),
            Ok(Command::SelectFloor {
                selection: FloorSelection::Floor(5)
            })
        );
        assert_eq!(
            "viewpoint-2-1".parse(),
            Ok(Command::GoToViewpoint { floor: 2, index: 1 })
        );
        assert_eq!(
            "resize-1280x720".parse(),
            Ok(Command::Resize {
                width: 1280,
                height: 720
            })
        );
    }

    #[test]
    fn test_action_ids_parse_back() {
        let commands = [
            Command::SetMode {
                mode: ViewMode::Orbit,
            },
            Command::SelectFloor {
                selection: FloorSelection::All,
            },
            Command::GoToViewpoint { floor: 7, index: 2 },
            Command::ResetView,
            Command::Resize {
                width: 10,
                height: 20,
            },
        ];
        for command in commands {
            assert_eq!(command.action_id().parse(), Ok(command));
        }
    }

    #[test]
    fn test_rejects_bad_actions() {
        assert_eq!(
            "fly".parse::<Command>(),
            Err(CommandError::UnknownAction("fly".into()))
        );
        assert!(matches!(
            "floor-top".parse::<Command>(),
            Err(CommandError::BadArgument { .. })
        ));
        assert!(matches!(
            "viewpoint-3".parse::<Command>(),
            Err(CommandError::BadArgument { .. })
        ));
        assert!(matches!(
            "resize-800".parse::<Command>(),
            Err(CommandError::BadArgument { .. })
        ));
    }

    #[test]
    fn test_json_form() {
        let command: Command =
            serde_json::from_str(r#"{"type":"goToViewpoint","floor":1,"index":0}"#).unwrap();
        assert_eq!(command, Command::GoToViewpoint { floor: 1, index: 0 });
    }
}
