use serde::{Deserialize, Serialize};

use crate::code::{CanonicalCode, normalize_tag};
use crate::ordering::compare_codes;

/// One base system with every distinct component code found under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemGroup {
    pub base_system: String,
    pub components: Vec<CanonicalCode>,
}

/// Groups raw component tags by base system, for protocol generation.
///
/// Malformed tags are dropped. Identical codes are kept once (first seen);
/// components keep first-seen order within their group and groups come out
/// in natural system order.
pub fn group_by_system<'a, I>(tags: I) -> Vec<SystemGroup>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<SystemGroup> = Vec::new();
    for raw in tags {
        let Some(code) = normalize_tag(raw) else {
            continue;
        };
        match groups
            .iter_mut()
            .find(|group| group.base_system == code.base_system)
        {
            Some(group) => {
                if !group.components.contains(&code) {
                    group.components.push(code);
                }
            }
            None => groups.push(SystemGroup {
                base_system: code.base_system.clone(),
                components: vec![code],
            }),
        }
    }
    groups.sort_by(|a, b| compare_codes(&a.base_system, &b.base_system));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_components_under_their_base_system() {
        let groups = group_by_system(vec![
            "=3601.010-B",
            "3601.009-A1",
            "3601.009:02-A2",
            "3601.009-A1",
            "not a tag",
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].base_system, "3601.009");
        let components: Vec<&str> = groups[0]
            .components
            .iter()
            .map(|c| c.component_part.as_str())
            .collect();
        assert_eq!(components, vec!["A1", "A2"]);
        assert_eq!(groups[1].base_system, "3601.010");
        assert_eq!(groups[1].components.len(), 1);
    }

    #[test]
    fn groups_come_out_in_natural_order() {
        let groups = group_by_system(vec!["3601.10-X", "3601.2-Y", "3601.001-Z"]);
        let systems: Vec<&str> = groups.iter().map(|g| g.base_system.as_str()).collect();
        assert_eq!(systems, vec!["3601.001", "3601.2", "3601.10"]);
    }

    #[test]
    fn variant_instances_share_the_base_group() {
        let groups = group_by_system(vec!["3601.001:04-A", "3601.001-B"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].components.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_system(Vec::<&str>::new()).is_empty());
        assert!(group_by_system(vec!["no separator"]).is_empty());
    }
}
