//! Gain ratio decision tree classifier for categorical data.
use super::logger::{InductionLogger, LeafReason, Verbosity};
use super::node::{NodeId, TreeNode};
use super::params::InductionParams;
use super::tree::DecisionTree;
use crate::data::dataset::Dataset;
use crate::error::{InductionError, Result};
use crate::metrics::classification::ClassificationMetrics;
use crate::metrics::information::FrequencyTables;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Decision Tree Classifier
///
/// Grows a multiway tree by repeatedly splitting on the unused attribute with the
/// highest gain ratio over the rows that reach the node.
#[derive(Clone, Debug, Default)]
pub struct Id3Classifier {
    tree: Option<DecisionTree>,
    params: InductionParams,
}

impl ClassificationMetrics for Id3Classifier {}

impl Id3Classifier {
    /// Creates a new classifier with default parameters.
    pub fn new() -> Self {
        Self {
            tree: None,
            params: InductionParams::new(),
        }
    }

    pub fn with_params(params: InductionParams) -> Self {
        Self { tree: None, params }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.params.set_parallel(parallel);
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.params.set_verbosity(verbosity);
    }

    pub fn params(&self) -> &InductionParams {
        &self.params
    }

    /// The induced tree, once [`fit`](Self::fit) has run.
    pub fn tree(&self) -> Option<&DecisionTree> {
        self.tree.as_ref()
    }

    /// Builds the decision tree from a dataset, replacing any previous tree.
    ///
    /// # Errors
    ///
    /// This method will return an error if the dataset has no rows.
    pub fn fit(&mut self, dataset: &Dataset) -> Result<String> {
        self.tree = None;
        if !dataset.is_not_empty() {
            return Err(InductionError::EmptyDataset);
        }

        let logger = InductionLogger::new(self.params.verbosity());
        logger.start_induction(dataset.nrows(), dataset.nattributes());

        let mut builder = TreeBuilder {
            dataset,
            params: &self.params,
            logger,
            tree: DecisionTree::new(dataset.nattributes()),
        };
        let rows = (0..dataset.nrows()).collect::<Vec<_>>();
        let used = vec![false; dataset.nattributes()];
        builder.build_tree(&rows, &used, None, 0);

        logger.finish_induction(&builder.tree);
        self.tree = Some(builder.tree);
        Ok("Finished building the tree.".into())
    }

    /// Predicts the decision of every row.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree wasn't built yet or a row
    /// can't be classified.
    pub fn predict<R, S>(&self, rows: &[R]) -> Result<Vec<String>>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let tree = self.tree.as_ref().ok_or(InductionError::NotFitted)?;
        rows.iter()
            .map(|row| tree.classify(row.as_ref()).map(str::to_string))
            .collect()
    }

    /// Accuracy of the tree on the labelled rows of `dataset`.
    pub fn score(&self, dataset: &Dataset) -> Result<f64> {
        let rows = (0..dataset.nrows())
            .map(|row| dataset.attribute_tokens(row))
            .collect::<Vec<_>>();
        let predictions = self.predict(&rows)?;
        let decisions = (0..dataset.nrows())
            .map(|row| dataset.decision(row))
            .collect::<Vec<_>>();
        let predictions = predictions.iter().map(String::as_str).collect::<Vec<_>>();
        self.accuracy(&decisions, &predictions)
    }
}

struct TreeBuilder<'a> {
    dataset: &'a Dataset,
    params: &'a InductionParams,
    logger: InductionLogger,
    tree: DecisionTree,
}

impl TreeBuilder<'_> {
    /// Grows the subtree for `rows` under `parent` and returns its root.
    ///
    /// `rows` is never empty: empty branches are closed by the caller.
    fn build_tree(
        &mut self,
        rows: &[usize],
        used: &[bool],
        parent: Option<NodeId>,
        depth: usize,
    ) -> NodeId {
        let dataset = self.dataset;
        let (x, y) = dataset.into_parts();

        let first = y[rows[0]];
        if rows.iter().all(|&row| y[row] == first) {
            let label = dataset.label(first);
            self.logger.leaf(depth, label, rows.len(), LeafReason::Pure);
            return self.tree.push(TreeNode::decision(label), parent);
        }

        let tables = FrequencyTables::from_subset(dataset, rows);
        let Some((attribute, gain_ratio)) = self.select_attribute(&tables, used) else {
            let label = dataset.label(self.majority_label(rows));
            self.logger.leaf(depth, label, rows.len(), LeafReason::Exhausted);
            return self.tree.push(TreeNode::decision(label), parent);
        };

        self.logger.split(depth, attribute, gain_ratio, rows.len());
        let node = self.tree.push(TreeNode::attribute(attribute), parent);
        let mut used = used.to_vec();
        used[attribute] = true;

        for value in 0..dataset.cardinality(attribute) {
            let subset = rows
                .iter()
                .copied()
                .filter(|&row| x[(row, attribute)] == value)
                .collect::<Vec<_>>();

            let child = if subset.is_empty() {
                let label = dataset.label(self.majority_label(rows));
                self.logger.leaf(depth + 1, label, 0, LeafReason::EmptyBranch);
                self.tree.push(TreeNode::decision(label), Some(node))
            } else {
                self.build_tree(&subset, &used, Some(node), depth + 1)
            };
            self.tree.set_branch(child, dataset.value(attribute, value));
        }

        node
    }

    /// Unused attribute with the highest gain ratio over the summarised rows.
    /// Ties go to the lowest attribute index.
    fn select_attribute(&self, tables: &FrequencyTables, used: &[bool]) -> Option<(usize, f64)> {
        let candidates = (0..tables.nattributes())
            .filter(|&attribute| !used[attribute])
            .collect::<Vec<_>>();
        let score = |attribute: usize| {
            tables
                .gain_ratio(attribute)
                .ok()
                .map(|ratio| (attribute, ratio))
        };

        let ratios = if self.params.parallel() {
            candidates
                .into_par_iter()
                .filter_map(score)
                .collect::<Vec<_>>()
        } else {
            candidates.into_iter().filter_map(score).collect::<Vec<_>>()
        };

        ratios
            .into_iter()
            .filter(|(_, ratio)| ratio.is_finite())
            .fold(None, |best, (attribute, ratio)| match best {
                Some((best_attribute, best_ratio))
                    if best_ratio > ratio || (best_ratio == ratio && best_attribute < attribute) =>
                {
                    best
                }
                _ => Some((attribute, ratio)),
            })
    }

    /// Most frequent label code among `rows`; on ties, the one met first when
    /// scanning `rows` in order.
    fn majority_label(&self, rows: &[usize]) -> usize {
        let y = &self.dataset.y;
        let mut counts = vec![0usize; self.dataset.labels().len()];
        for &row in rows {
            counts[y[row]] += 1;
        }
        let max = counts.iter().copied().max().unwrap_or(0);
        rows.iter()
            .map(|&row| y[row])
            .find(|&label| counts[label] == max)
            .unwrap_or(y[rows[0]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::node::NodeKind;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn dataset(rows: &[&[&str]]) -> Dataset {
        Dataset::from_rows(rows.iter().map(|row| row.to_vec())).unwrap()
    }

    fn fit(data: &Dataset) -> DecisionTree {
        let mut classifier = Id3Classifier::new();
        classifier.set_verbosity(Verbosity::Silent);
        classifier.fit(data).unwrap();
        classifier.tree().unwrap().clone()
    }

    fn random_dataset(rng: &mut StdRng, nrows: usize, nattributes: usize) -> Dataset {
        let rows = (0..nrows)
            .map(|_| {
                let mut row = (0..nattributes)
                    .map(|attribute| format!("v{}", rng.gen_range(0..attribute % 3 + 2)))
                    .collect::<Vec<_>>();
                row.push(format!("l{}", rng.gen_range(0..3)));
                row
            })
            .collect::<Vec<_>>();
        Dataset::from_rows(rows).unwrap()
    }

    const PLAY_TENNIS: &str = include_str!("../../data/play_tennis.data");

    fn attribute_of(tree: &DecisionTree, id: NodeId) -> Option<usize> {
        tree.node(id).attribute_index()
    }

    #[test]
    fn test_single_row_is_a_leaf() {
        let tree = fit(&dataset(&[&["a", "b", "yes"]]));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(tree.root()).label(), Some("yes"));
    }

    #[test]
    fn test_single_label_is_a_leaf() {
        let tree = fit(&dataset(&[
            &["a", "x", "no"],
            &["b", "y", "no"],
            &["c", "x", "no"],
        ]));
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.node(tree.root()).kind(),
            &NodeKind::Decision {
                label: "no".to_string()
            }
        );
    }

    #[test]
    fn test_informative_attribute_at_root() {
        let tree = fit(&dataset(&[
            &["a", "x", "yes"],
            &["a", "z", "no"],
            &["b", "y", "no"],
            &["b", "z", "yes"],
        ]));
        let root = tree.node(tree.root());
        assert_eq!(root.attribute_index(), Some(1));

        let branches = root
            .children()
            .iter()
            .map(|&child| tree.node(child).branch().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(branches, vec!["x", "z", "y"]);

        let z = tree.child_for(tree.root(), "z").unwrap();
        assert_eq!(attribute_of(&tree, z), Some(0));
        assert_eq!(tree.classify(&["a", "z"]).unwrap(), "no");
        assert_eq!(tree.classify(&["b", "z"]).unwrap(), "yes");
        assert_eq!(tree.classify(&["b", "x"]).unwrap(), "yes");
        assert_eq!(tree.classify(&["a", "y"]).unwrap(), "no");
    }

    #[test]
    fn test_tie_goes_to_first_attribute() {
        let tree = fit(&dataset(&[
            &["a", "x", "yes"],
            &["a", "y", "no"],
            &["b", "x", "no"],
            &["b", "y", "no"],
        ]));
        assert_eq!(attribute_of(&tree, tree.root()), Some(0));

        let a = tree.child_for(tree.root(), "a").unwrap();
        assert_eq!(attribute_of(&tree, a), Some(1));
        let b = tree.child_for(tree.root(), "b").unwrap();
        assert_eq!(tree.node(b).label(), Some("no"));
        assert_eq!(tree.node(b).name(), "b ➔ Decision: no");
    }

    #[test]
    fn test_empty_branch_takes_parent_majority() {
        // Under a1 = "b" the rows never take a2 = "z", so that branch is closed
        // with the majority of the a1 = "b" rows.
        let tree = fit(&dataset(&[
            &["a", "z", "yes"],
            &["a", "x", "yes"],
            &["b", "x", "no"],
            &["b", "y", "yes"],
            &["b", "x", "no"],
        ]));
        let root = tree.root();
        assert_eq!(attribute_of(&tree, root), Some(0));
        let b = tree.child_for(root, "b").unwrap();
        assert_eq!(attribute_of(&tree, b), Some(1));
        let z = tree.child_for(b, "z").unwrap();
        assert_eq!(tree.node(z).label(), Some("no"));
        assert_eq!(tree.node(z).name(), "z ➔ Decision: no");
    }

    #[test]
    fn test_exhausted_attributes_take_majority() {
        let tree = fit(&dataset(&[
            &["a", "no"],
            &["a", "yes"],
            &["a", "yes"],
            &["b", "no"],
        ]));
        let a = tree.child_for(tree.root(), "a").unwrap();
        assert_eq!(tree.node(a).label(), Some("yes"));
    }

    #[test]
    fn test_majority_tie_goes_to_first_seen() {
        let tree = fit(&dataset(&[&["a", "no"], &["a", "yes"], &["b", "no"]]));
        let a = tree.child_for(tree.root(), "a").unwrap();
        assert_eq!(tree.node(a).label(), Some("no"));

        let tree = fit(&dataset(&[&["a", "yes"], &["a", "no"], &["b", "no"]]));
        let a = tree.child_for(tree.root(), "a").unwrap();
        assert_eq!(tree.node(a).label(), Some("yes"));
    }

    #[test]
    fn test_no_attributes() {
        let tree = fit(&dataset(&[&["yes"], &["no"], &["no"]]));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(tree.root()).label(), Some("no"));
    }

    #[test]
    fn test_tree_invariants_on_random_data() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..30 {
            let nrows = rng.gen_range(1..60);
            let data = random_dataset(&mut rng, nrows, 5);
            let tree = fit(&data);
            let labels = data.labels().tokens().iter().collect::<HashSet<_>>();

            for (_, id) in tree.pre_order() {
                let node = tree.node(id);
                match node.kind() {
                    NodeKind::Decision { label } => {
                        assert!(node.children().is_empty());
                        assert!(labels.contains(label));
                    }
                    NodeKind::Attribute { attribute } => {
                        let expected = data.attribute_values(*attribute).unwrap().tokens();
                        let branches = node
                            .children()
                            .iter()
                            .map(|&child| tree.node(child).branch().unwrap().to_string())
                            .collect::<Vec<_>>();
                        assert_eq!(branches.as_slice(), expected);
                    }
                }

                let path = tree.path_to_root(id);
                let attributes = path
                    .iter()
                    .filter_map(|&ancestor| attribute_of(&tree, ancestor))
                    .collect::<Vec<_>>();
                let distinct = attributes.iter().collect::<HashSet<_>>();
                assert_eq!(attributes.len(), distinct.len());
            }
            assert!(tree.depth() <= data.nattributes());
        }
    }

    #[test]
    fn test_rebuild_is_identical() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            let data = random_dataset(&mut rng, 40, 4);
            assert_eq!(fit(&data), fit(&data));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            let data = random_dataset(&mut rng, 50, 6);
            let mut parallel = Id3Classifier::new();
            parallel.set_parallel(true);
            parallel.set_verbosity(Verbosity::Silent);
            parallel.fit(&data).unwrap();
            assert_eq!(parallel.tree(), Some(&fit(&data)));
        }
    }

    #[test]
    fn test_consistent_data_is_learned_exactly() {
        let data = dataset(&[
            &["sunny", "high", "no"],
            &["sunny", "normal", "yes"],
            &["overcast", "high", "yes"],
            &["rain", "high", "no"],
            &["rain", "normal", "yes"],
        ]);
        let mut classifier = Id3Classifier::new();
        classifier.set_verbosity(Verbosity::Silent);
        classifier.fit(&data).unwrap();
        assert_eq!(classifier.score(&data).unwrap(), 1.0);
    }

    #[test]
    fn test_play_tennis_tree() {
        let data = crate::data::reader::read_categorical(PLAY_TENNIS.as_bytes()).unwrap();
        let mut classifier = Id3Classifier::new();
        classifier.set_verbosity(Verbosity::Silent);
        classifier.fit(&data).unwrap();
        let tree = classifier.tree().unwrap();

        let root = tree.root();
        assert_eq!(attribute_of(tree, root), Some(0));
        let branches = tree
            .node(root)
            .children()
            .iter()
            .map(|&child| tree.node(child).branch().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(branches, vec!["sunny", "overcast", "rain"]);

        let sunny = tree.child_for(root, "sunny").unwrap();
        assert_eq!(attribute_of(tree, sunny), Some(2));
        let overcast = tree.child_for(root, "overcast").unwrap();
        assert_eq!(tree.node(overcast).label(), Some("yes"));
        let rain = tree.child_for(root, "rain").unwrap();
        assert_eq!(attribute_of(tree, rain), Some(3));

        assert_eq!(tree.len(), 8);
        assert_eq!(tree.depth(), 2);
        assert_eq!(classifier.score(&data).unwrap(), 1.0);
        assert_eq!(tree.classify(&["sunny", "cool", "high", "strong"]).unwrap(), "no");
    }

    #[test]
    fn test_predict() {
        let data = dataset(&[&["a", "x", "yes"], &["b", "x", "no"]]);
        let mut classifier = Id3Classifier::new();
        classifier.set_verbosity(Verbosity::Silent);
        classifier.fit(&data).unwrap();
        let predictions = classifier.predict(&[vec!["b", "x"], vec!["a", "x"]]).unwrap();
        assert_eq!(predictions, vec!["no", "yes"]);
    }

    #[test]
    fn test_predict_before_fit() {
        let classifier = Id3Classifier::new();
        let result = classifier.predict(&[vec!["a"]]);
        assert!(matches!(result, Err(InductionError::NotFitted)));
    }
}
