//! Иерархия справочника, восстановленная из плоского списка по `parent_value`.
//!
//! Узлы лежат в арене в порядке загрузки, индекс `value -> позиция` строится
//! один раз, списки детей заполняются за один проход.

use contracts::shared::dictionary::DictionaryEntry;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub entry: DictionaryEntry,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// Строка дерева для отрисовки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    pub index: usize,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictTree {
    nodes: Vec<TreeNode>,
    roots: Vec<usize>,
    index: HashMap<String, usize>,
}

impl DictTree {
    pub fn build(entries: &[DictionaryEntry]) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            // при дублях значения побеждает первый элемент
            index.entry(entry.value.clone()).or_insert(i);
        }

        let mut nodes: Vec<TreeNode> = entries
            .iter()
            .cloned()
            .map(|entry| TreeNode {
                entry,
                parent: None,
                children: Vec::new(),
            })
            .collect();
        let mut roots = Vec::new();

        for i in 0..nodes.len() {
            let parent = nodes[i]
                .entry
                .parent_value
                .as_ref()
                .and_then(|p| index.get(p).copied())
                .filter(|&p| p != i);
            match parent {
                Some(p) => {
                    nodes[i].parent = Some(p);
                    nodes[p].children.push(i);
                }
                None => roots.push(i),
            }
        }

        let mut tree = Self {
            nodes,
            roots,
            index,
        };
        tree.break_cycles();
        tree
    }

    /// Nodes unreachable from any root sit on (or under) a parent cycle.
    /// The cycle member met first when walking up is detached and made a root.
    fn break_cycles(&mut self) {
        let mut reachable = vec![false; self.nodes.len()];
        for &root in &self.roots {
            self.mark_subtree(root, &mut reachable);
        }

        for i in 0..self.nodes.len() {
            if reachable[i] {
                continue;
            }
            let mut seen = HashSet::new();
            let mut current = i;
            while seen.insert(current) {
                match self.nodes[current].parent {
                    Some(p) => current = p,
                    None => break,
                }
            }
            if let Some(p) = self.nodes[current].parent.take() {
                self.nodes[p].children.retain(|&c| c != current);
            }
            log::warn!(
                "dictionary tree: cycle at value '{}', promoted to root",
                self.nodes[current].entry.value
            );
            self.roots.push(current);
            self.mark_subtree(current, &mut reachable);
        }

        self.roots.sort_unstable();
    }

    fn mark_subtree(&self, start: usize, reachable: &mut [bool]) {
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            if reachable[i] {
                continue;
            }
            reachable[i] = true;
            stack.extend(self.nodes[i].children.iter().copied());
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, index: usize) -> &TreeNode {
        &self.nodes[index]
    }

    pub fn get(&self, value: &str) -> Option<&DictionaryEntry> {
        self.index.get(value).map(|&i| &self.nodes[i].entry)
    }

    /// Значения дочерних элементов в порядке справочника
    pub fn children_of(&self, value: &str) -> Vec<String> {
        self.index
            .get(value)
            .map(|&i| {
                self.nodes[i]
                    .children
                    .iter()
                    .map(|&c| self.nodes[c].entry.value.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Значения всех узлов, у которых есть дети (для режима "развернуть всё")
    pub fn all_parent_values(&self) -> HashSet<String> {
        self.nodes
            .iter()
            .filter(|n| !n.children.is_empty())
            .map(|n| n.entry.value.clone())
            .collect()
    }

    /// Ancestors of `value`, nearest first.
    pub fn ancestors(&self, value: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut current = self.index.get(value).and_then(|&i| self.nodes[i].parent);
        while let Some(i) = current {
            result.push(self.nodes[i].entry.value.clone());
            current = self.nodes[i].parent;
        }
        result
    }

    /// Полный путь до элемента: "Корень / Потомок / Элемент"
    pub fn path_label(&self, value: &str, separator: &str) -> Option<String> {
        let entry = self.get(value)?;
        let mut parts: Vec<String> = self
            .ancestors(value)
            .iter()
            .rev()
            .filter_map(|v| self.get(v).map(|e| e.label.clone()))
            .collect();
        parts.push(entry.label.clone());
        Some(parts.join(separator))
    }

    fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(i) = stack.pop() {
            order.push(i);
            stack.extend(self.nodes[i].children.iter().rev().copied());
        }
        order
    }

    /// Case-insensitive label filter. A node is kept when it or any
    /// descendant matches; an empty query keeps everything.
    pub fn filter(&self, query: &str) -> Vec<bool> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![true; self.nodes.len()];
        }

        let mut kept = vec![false; self.nodes.len()];
        for i in self.preorder().into_iter().rev() {
            let node = &self.nodes[i];
            kept[i] = node.entry.label.to_lowercase().contains(&query)
                || node.children.iter().any(|&c| kept[c]);
        }
        kept
    }

    /// Строки для отрисовки. При активном фильтре все оставшиеся узлы раскрыты.
    pub fn visible_rows(&self, expanded: &HashSet<String>, query: &str) -> Vec<VisibleRow> {
        let filtering = !query.trim().is_empty();
        let kept = self.filter(query);

        let mut rows = Vec::new();
        let mut stack: Vec<(usize, usize)> = self
            .roots
            .iter()
            .rev()
            .filter(|&&i| kept[i])
            .map(|&i| (i, 0))
            .collect();

        while let Some((i, depth)) = stack.pop() {
            let node = &self.nodes[i];
            let has_children = node.children.iter().any(|&c| kept[c]);
            let is_expanded =
                has_children && (filtering || expanded.contains(&node.entry.value));
            rows.push(VisibleRow {
                index: i,
                depth,
                has_children,
                expanded: is_expanded,
            });
            if is_expanded {
                stack.extend(
                    node.children
                        .iter()
                        .rev()
                        .filter(|&&c| kept[c])
                        .map(|&c| (c, depth + 1)),
                );
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tree: &DictTree, rows: &[VisibleRow]) -> Vec<String> {
        rows.iter()
            .map(|r| tree.node(r.index).entry.value.clone())
            .collect()
    }

    fn sciences() -> Vec<DictionaryEntry> {
        vec![
            DictionaryEntry::new("nat", "Естественные науки"),
            DictionaryEntry::new("phys", "Физика").with_parent("nat"),
            DictionaryEntry::new("chem", "Химия").with_parent("nat"),
            DictionaryEntry::new("hum", "Гуманитарные науки"),
            DictionaryEntry::new("hist", "История").with_parent("hum"),
            DictionaryEntry::new("optics", "Оптика").with_parent("phys"),
        ]
    }

    #[test]
    fn test_filter_keeps_ancestors_of_match() {
        let tree = DictTree::build(&[
            DictionaryEntry::new("a", "A"),
            DictionaryEntry::new("b", "B").with_parent("a"),
        ]);

        assert_eq!(tree.filter("B"), vec![true, true]);
        assert_eq!(tree.filter("Z"), vec![false, false]);
        assert_eq!(tree.filter(""), vec![true, true]);
    }

    #[test]
    fn test_build_links_children_in_fetch_order() {
        let tree = DictTree::build(&sciences());

        assert_eq!(tree.len(), 6);
        assert_eq!(tree.roots(), &[0, 3]);
        assert_eq!(tree.children_of("nat"), vec!["phys", "chem"]);
        assert_eq!(tree.ancestors("optics"), vec!["phys", "nat"]);
        assert_eq!(
            tree.path_label("optics", " / ").as_deref(),
            Some("Естественные науки / Физика / Оптика")
        );
    }

    #[test]
    fn test_unknown_parent_becomes_root() {
        let tree = DictTree::build(&[
            DictionaryEntry::new("x", "X").with_parent("missing"),
            DictionaryEntry::new("y", "Y").with_parent("y"),
        ]);
        assert_eq!(tree.roots(), &[0, 1]);
    }

    #[test]
    fn test_parent_cycle_is_broken() {
        let tree = DictTree::build(&[
            DictionaryEntry::new("a", "A").with_parent("b"),
            DictionaryEntry::new("b", "B").with_parent("a"),
            DictionaryEntry::new("c", "C").with_parent("b"),
        ]);

        let all: HashSet<String> = tree.all_parent_values();
        let rows = tree.visible_rows(&all, "");
        assert_eq!(rows.len(), 3);
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn test_visible_rows_respect_expansion() {
        let tree = DictTree::build(&sciences());

        let collapsed = tree.visible_rows(&HashSet::new(), "");
        assert_eq!(values(&tree, &collapsed), vec!["nat", "hum"]);
        assert!(collapsed[0].has_children);
        assert!(!collapsed[0].expanded);

        let expanded = HashSet::from(["nat".to_string()]);
        let rows = tree.visible_rows(&expanded, "");
        assert_eq!(values(&tree, &rows), vec!["nat", "phys", "chem", "hum"]);
        assert_eq!(rows[1].depth, 1);

        let rows = tree.visible_rows(&tree.all_parent_values(), "");
        assert_eq!(
            values(&tree, &rows),
            vec!["nat", "phys", "optics", "chem", "hum", "hist"]
        );
    }

    #[test]
    fn test_filtering_expands_and_prunes_siblings() {
        let tree = DictTree::build(&sciences());

        let rows = tree.visible_rows(&HashSet::new(), "опт");
        assert_eq!(values(&tree, &rows), vec!["nat", "phys", "optics"]);
        assert_eq!(rows[2].depth, 2);
        assert!(!rows[2].has_children);
    }
}
