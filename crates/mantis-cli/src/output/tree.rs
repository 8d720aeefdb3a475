use std::fmt::Write;

use mantis_hierarchy::TreeNode;

/// Draw the hierarchy with box-drawing guides, roots flush left.
#[must_use]
pub fn render_tree(roots: &[TreeNode]) -> String {
    let mut out = String::new();
    for root in roots {
        let _ = writeln!(out, "{} #{}", root.node.label, root.node.id);
        write_children(&mut out, &root.children, "");
    }
    if out.is_empty() {
        out.push_str("(empty hierarchy)");
    }
    out.trim_end().to_string()
}

fn write_children(out: &mut String, children: &[TreeNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, indent) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        let _ = writeln!(out, "{prefix}{branch}{} #{}", child.node.label, child.node.id);
        write_children(out, &child.children, &format!("{prefix}{indent}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mantis_core::entities::{Area, Equipment, Line};
    use mantis_core::ids::EntityId;
    use mantis_hierarchy::{Snapshot, SnapshotParts};
    use pretty_assertions::assert_eq;

    fn id(raw: u64) -> EntityId {
        EntityId::new(raw).unwrap()
    }

    #[test]
    fn draws_nested_levels() {
        let snapshot = Snapshot::from_parts(SnapshotParts {
            areas: vec![Area { id: id(1), name: "A".into(), description: None }],
            lines: vec![
                Line { id: id(11), name: "M".into(), description: None, area_id: id(1) },
                Line { id: id(10), name: "L".into(), description: None, area_id: id(1) },
            ],
            equipments: vec![Equipment {
                id: id(100),
                name: "E".into(),
                tag: "TAG".into(),
                description: None,
                criticality: None,
                line_id: id(10),
            }],
            ..SnapshotParts::default()
        });

        assert_eq!(
            render_tree(&snapshot.tree()),
            "A #1\n├── L #10\n│   └── E (TAG) #100\n└── M #11"
        );
    }

    #[test]
    fn empty_tree_has_marker() {
        assert_eq!(render_tree(&[]), "(empty hierarchy)");
    }
}
