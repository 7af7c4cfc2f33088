//! Second pass resolving identifiers declared before their targets.
//!
//! Builders record raw ids while the document streams by. Once the root
//! element closes, [`DeferredLinker::link`] looks them up in the finished
//! home and sets the references that exist.

use std::collections::HashMap;

use log::debug;

use crate::core::Id;
use crate::home::{Home, HomePrint};
use crate::xml::deserialize::context::Diagnostics;

/// Raw neighbor ids of one wall, by position in [`Home::walls`].
#[derive(Debug, Clone, PartialEq)]
struct WallJoin {
    index: usize,
    at_start: Option<String>,
    at_end: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct PrintedLevels {
    ids: Vec<String>,
    /// The print was replaced by the entity hook and must be left as is.
    substituted: bool,
}

/// References waiting for the end of the document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeferredLinker {
    wall_joins: Vec<WallJoin>,
    printed_levels: Option<PrintedLevels>,
    selected_level: Option<String>,
}

impl DeferredLinker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the references already present in `home`.
    ///
    /// Linking a home against its own references leaves it unchanged.
    pub fn from_home(home: &Home) -> Self {
        let mut linker = Self::new();
        for (index, wall) in home.walls.iter().enumerate() {
            linker.record_wall_joins(
                index,
                wall.wall_at_start.as_ref().map(|id| id.to_string()),
                wall.wall_at_end.as_ref().map(|id| id.to_string()),
            );
        }
        if let Some(levels) = home.print.as_ref().and_then(|p| p.printed_levels.as_ref()) {
            linker.record_printed_levels(levels.iter().map(Id::to_string).collect(), false);
        }
        if let Some(level) = &home.selected_level {
            linker.record_selected_level(level.to_string());
        }
        linker
    }

    /// Remember the joins declared by the wall stored at `index`.
    pub fn record_wall_joins(
        &mut self,
        index: usize,
        at_start: Option<String>,
        at_end: Option<String>,
    ) {
        if at_start.is_some() || at_end.is_some() {
            self.wall_joins.push(WallJoin {
                index,
                at_start,
                at_end,
            });
        }
    }

    pub fn record_printed_levels(&mut self, ids: Vec<String>, substituted: bool) {
        self.printed_levels = Some(PrintedLevels { ids, substituted });
    }

    pub fn record_selected_level(&mut self, id: impl Into<String>) {
        self.selected_level = Some(id.into());
    }

    /// Set every recorded reference whose target exists in `home`.
    ///
    /// Dangling ids and walls joined to themselves are reported and skipped.
    pub fn link(&self, home: &mut Home, diagnostics: &Diagnostics) {
        self.link_walls(home, diagnostics);
        self.link_printed_levels(home, diagnostics);
        self.link_selected_level(home, diagnostics);
        debug!(
            "linked {} wall joins across {} walls",
            self.wall_joins.len(),
            home.walls.len()
        );
    }

    fn link_walls(&self, home: &mut Home, diagnostics: &Diagnostics) {
        let mut by_id: HashMap<Id, usize> = HashMap::new();
        for (index, wall) in home.walls.iter().enumerate() {
            by_id.entry(wall.id.clone()).or_insert(index);
        }

        for join in &self.wall_joins {
            let Some(wall) = home.walls.get(join.index) else {
                diagnostics.warn(format!("no wall at index {} to join", join.index));
                continue;
            };
            let own_id = wall.id.clone();
            let resolve = |end: &str, reference: &Option<String>| -> Option<Id> {
                let reference = reference.as_deref()?;
                if own_id == reference {
                    diagnostics.warn(format!(
                        "ignored wall {} joined to itself at its {}",
                        own_id, end
                    ));
                    return None;
                }
                let id = Id::new(reference);
                if by_id.contains_key(&id) {
                    Some(id)
                } else {
                    diagnostics.warn(format!(
                        "wall {} joined at its {} to unknown wall '{}'",
                        own_id, end, reference
                    ));
                    None
                }
            };
            let at_start = resolve("start", &join.at_start);
            let at_end = resolve("end", &join.at_end);

            let wall = &mut home.walls[join.index];
            if at_start.is_some() {
                wall.wall_at_start = at_start;
            }
            if at_end.is_some() {
                wall.wall_at_end = at_end;
            }
        }
    }

    fn link_printed_levels(&self, home: &mut Home, diagnostics: &Diagnostics) {
        let Some(printed) = &self.printed_levels else {
            return;
        };
        if printed.substituted {
            debug!("print replaced by entity hook, printed levels left unresolved");
            return;
        }
        let Some(print) = &home.print else {
            return;
        };

        let levels: Vec<Id> = printed
            .ids
            .iter()
            .filter_map(|id| match home.level(id) {
                Some(level) => Some(level.id.clone()),
                None => {
                    diagnostics.warn(format!("printed level '{}' doesn't exist", id));
                    None
                }
            })
            .collect();

        home.print = Some(HomePrint {
            printed_levels: Some(levels),
            ..print.clone()
        });
    }

    fn link_selected_level(&self, home: &mut Home, diagnostics: &Diagnostics) {
        let Some(id) = &self.selected_level else {
            return;
        };
        match home.level(id) {
            Some(level) => home.selected_level = Some(level.id.clone()),
            None => diagnostics.warn(format!("selected level '{}' doesn't exist", id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{level, wall};

    fn linked(home: &mut Home, linker: &DeferredLinker) -> Vec<String> {
        let diagnostics = Diagnostics::default();
        linker.link(home, &diagnostics);
        diagnostics.into_warnings()
    }

    #[test]
    fn test_mutual_joins() {
        let mut home = Home::new(0);
        home.walls.push(wall("a"));
        home.walls.push(wall("b"));
        let mut linker = DeferredLinker::new();
        linker.record_wall_joins(0, None, Some("b".to_string()));
        linker.record_wall_joins(1, Some("a".to_string()), None);

        assert!(linked(&mut home, &linker).is_empty());
        assert_eq!(home.walls[0].wall_at_end, Some(Id::new("b")));
        assert_eq!(home.walls[1].wall_at_start, Some(Id::new("a")));
        assert_eq!(home.walls[0].wall_at_start, None);
    }

    #[test]
    fn test_self_join_is_dropped() {
        let mut home = Home::new(0);
        home.walls.push(wall("a"));
        let mut linker = DeferredLinker::new();
        linker.record_wall_joins(0, Some("a".to_string()), None);

        let warnings = linked(&mut home, &linker);
        assert_eq!(home.walls[0].wall_at_start, None);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("itself"));
    }

    #[test]
    fn test_mutual_cycle_at_same_end_is_kept() {
        let mut home = Home::new(0);
        home.walls.push(wall("a"));
        home.walls.push(wall("b"));
        let mut linker = DeferredLinker::new();
        linker.record_wall_joins(0, Some("b".to_string()), None);
        linker.record_wall_joins(1, Some("a".to_string()), None);

        linked(&mut home, &linker);
        assert_eq!(home.walls[0].wall_at_start, Some(Id::new("b")));
        assert_eq!(home.walls[1].wall_at_start, Some(Id::new("a")));
    }

    #[test]
    fn test_dangling_join_is_left_unset() {
        let mut home = Home::new(0);
        home.walls.push(wall("a"));
        let mut linker = DeferredLinker::new();
        linker.record_wall_joins(0, None, Some("ghost".to_string()));

        let warnings = linked(&mut home, &linker);
        assert_eq!(home.walls[0].wall_at_end, None);
        assert!(warnings[0].contains("ghost"));
    }

    #[test]
    fn test_relinking_is_idempotent() {
        let mut home = Home::new(0);
        home.levels.push(level("l0", 0.0));
        home.levels.push(level("l1", 250.0));
        home.walls.push(wall("a"));
        home.walls.push(wall("b"));
        home.print = Some(HomePrint::default());
        let mut linker = DeferredLinker::new();
        linker.record_wall_joins(0, Some("b".to_string()), Some("b".to_string()));
        linker.record_wall_joins(1, Some("a".to_string()), Some("a".to_string()));
        linker.record_printed_levels(vec!["l1".to_string(), "l0".to_string()], false);
        linker.record_selected_level("l1");
        linked(&mut home, &linker);

        let before = home.clone();
        linked(&mut home, &DeferredLinker::from_home(&before));
        assert_eq!(home, before);
    }

    #[test]
    fn test_printed_levels_keep_declared_order() {
        let mut home = Home::new(0);
        home.levels.push(level("l0", 0.0));
        home.levels.push(level("l1", 250.0));
        home.print = Some(HomePrint {
            header_format: Some("$name".to_string()),
            ..HomePrint::default()
        });
        let mut linker = DeferredLinker::new();
        linker.record_printed_levels(
            vec!["l1".to_string(), "missing".to_string(), "l0".to_string()],
            false,
        );

        linked(&mut home, &linker);
        let print = home.print.unwrap();
        assert_eq!(print.header_format.as_deref(), Some("$name"));
        assert_eq!(print.printed_levels, Some(vec![Id::new("l1"), Id::new("l0")]));
    }

    #[test]
    fn test_substituted_print_is_untouched() {
        let mut home = Home::new(0);
        home.levels.push(level("l0", 0.0));
        home.print = Some(HomePrint::default());
        let mut linker = DeferredLinker::new();
        linker.record_printed_levels(vec!["l0".to_string()], true);

        linked(&mut home, &linker);
        assert_eq!(home.print.unwrap().printed_levels, None);
    }

    #[test]
    fn test_selected_level() {
        let mut home = Home::new(0);
        home.levels.push(level("l0", 0.0));
        let mut linker = DeferredLinker::new();
        linker.record_selected_level("l0");
        linked(&mut home, &linker);
        assert_eq!(home.selected_level, Some(Id::new("l0")));

        let mut linker = DeferredLinker::new();
        linker.record_selected_level("nope");
        let mut other = Home::new(0);
        assert_eq!(linked(&mut other, &linker).len(), 1);
        assert_eq!(other.selected_level, None);
    }
}
