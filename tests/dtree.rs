use minitrees::prelude::*;
use minitrees::{Error, Node};


// Toy example
//
//  a | b | class
// ---+---+------
//  0 | 0 |   0
//  0 | 1 |   0
//  1 | 0 |   1
//  1 | 1 |   1
//
// `a` separates the classes perfectly, `b` carries no information.
fn separable() -> Sample {
    let attrs = vec![
        Attribute::nominal("a", ["0", "1"]),
        Attribute::nominal("b", ["0", "1"]),
        Attribute::nominal("class", ["0", "1"]),
    ];
    let mut sample = Sample::new(attrs, 2).unwrap();
    sample.push(vec![0.0, 0.0, 0.0]).unwrap();
    sample.push(vec![0.0, 1.0, 0.0]).unwrap();
    sample.push(vec![1.0, 0.0, 1.0]).unwrap();
    sample.push(vec![1.0, 1.0, 1.0]).unwrap();
    sample
}


// Toy example
//
//  a | class
// ---+------
//  0 |   0
//  0 |   0
//  0 |   0
//  0 |   1
//
// No attribute has positive information gain.
fn uninformative() -> Sample {
    let attrs = vec![
        Attribute::nominal("a", ["0", "1"]),
        Attribute::nominal("class", ["0", "1"]),
    ];
    let mut sample = Sample::new(attrs, 1).unwrap();
    sample.push(vec![0.0, 0.0]).unwrap();
    sample.push(vec![0.0, 0.0]).unwrap();
    sample.push(vec![0.0, 0.0]).unwrap();
    sample.push(vec![0.0, 1.0]).unwrap();
    sample
}


// Toy example
//
//  outlook  | windy | play
// ----------+-------+-----
//  sunny    | no    | no
//  sunny    | yes   | no
//  overcast | no    | yes
//  rainy    | no    | yes
//  rainy    | yes   | no
//  overcast | yes   | yes
//  sunny    | no    | no
//  rainy    | no    | yes
fn weather() -> Sample {
    let attrs = vec![
        Attribute::nominal("outlook", ["sunny", "overcast", "rainy"]),
        Attribute::nominal("windy", ["no", "yes"]),
        Attribute::nominal("play", ["no", "yes"]),
    ];
    let mut sample = Sample::new(attrs, 2).unwrap();
    let rows = [
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
        [2.0, 0.0, 1.0],
        [2.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
        [0.0, 0.0, 0.0],
        [2.0, 0.0, 1.0],
    ];
    for row in rows {
        sample.push(row.to_vec()).unwrap();
    }
    sample
}


#[test]
fn separable_tree_has_depth_one() {
    let sample = separable();
    let tree = DecisionTreeBuilder::new(ClassFrequency::new()).build();
    let f = tree.fit(&sample).unwrap();

    assert_eq!(f.depth(), 1);
    assert_eq!(f.n_leaves(), 2);
    match f.root() {
        Node::Branch { attribute, children } => {
            assert_eq!(*attribute, 0);
            assert_eq!(children.len(), 2);
        },
        Node::Leaf { .. } => panic!("the root must split on `a`"),
    }

    let d0 = f.distribution(&sample[0]).unwrap();
    let d1 = f.distribution(&sample[3]).unwrap();
    assert_eq!(d0, vec![1.0, 0.0]);
    assert_eq!(d1, vec![0.0, 1.0]);

    let predictions = f.predict_all(&sample).unwrap();
    assert_eq!(predictions, vec![Some(0), Some(0), Some(1), Some(1)]);
}


#[test]
fn uninformative_tree_is_a_single_leaf() {
    let sample = uninformative();
    let tree = DecisionTreeBuilder::new(NaiveBayes::new()).build();
    let f = tree.fit(&sample).unwrap();

    assert_eq!(f.depth(), 0);
    assert_eq!(f.n_leaves(), 1);
    match f.root() {
        Node::Leaf { records, model } => {
            assert_eq!(records.n_instances(), 4);
            assert!(model.is_none());
        },
        Node::Branch { .. } => panic!("the root must be a leaf"),
    }

    // Without the attribute value, only the prior remains:
    // [(3 + 1) / (4 + 2), (1 + 1) / (4 + 2)]
    let query = Instance::new(vec![MISSING, MISSING]);
    let dist = f.distribution(&query).unwrap();
    assert!((dist[0] - 4.0 / 6.0).abs() < 1e-9);
    assert!((dist[1] - 2.0 / 6.0).abs() < 1e-9);

    // P(a = 0 | 0) = 4 / 5, P(a = 0 | 1) = 2 / 3
    let dist = f.distribution(&sample[0]).unwrap();
    let p0 = 4.0 / 6.0 * 4.0 / 5.0;
    let p1 = 2.0 / 6.0 * 2.0 / 3.0;
    assert!((dist[0] - p0 / (p0 + p1)).abs() < 1e-9);
    assert!((dist[1] - p1 / (p0 + p1)).abs() < 1e-9);
}


#[test]
fn leaf_distributions_sum_to_one() {
    let sample = weather();
    let tree = DecisionTreeBuilder::new(NaiveBayes::new()).build();
    let f = tree.fit(&sample).unwrap();

    for instance in sample.instances() {
        let dist = f.distribution(instance).unwrap();
        let sum = dist.iter().sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-9, "{dist:?}");
    }
}


#[test]
fn prediction_is_idempotent() {
    let sample = weather();
    let knn = KnnBuilder::new().adaptive(true).upper_bound(3).build();
    let tree = DecisionTreeBuilder::new(knn).build();
    let f = tree.fit(&sample).unwrap();

    for instance in sample.instances() {
        let first = f.distribution(instance).unwrap();
        let second = f.distribution(instance).unwrap();
        assert_eq!(first, second);
    }
}


#[test]
fn cached_leaves_agree_with_per_query_leaves() {
    let sample = weather();
    let per_query = DecisionTreeBuilder::new(NaiveBayes::new())
        .leaf_fitting(LeafFitting::PerQuery)
        .build()
        .fit(&sample)
        .unwrap();
    let cached = DecisionTreeBuilder::new(NaiveBayes::new())
        .leaf_fitting(LeafFitting::Cached)
        .build()
        .fit(&sample)
        .unwrap();

    for instance in sample.instances() {
        let p = per_query.distribution(instance).unwrap();
        let c = cached.distribution(instance).unwrap();
        assert_eq!(p, c);
    }
}


#[test]
fn unseen_value_reaches_an_empty_leaf() {
    //  a | class
    // ---+------
    //  x |   0
    //  y |   1
    // The value `z` is never observed.
    let attrs = vec![
        Attribute::nominal("a", ["x", "y", "z"]),
        Attribute::nominal("class", ["0", "1"]),
    ];
    let mut sample = Sample::new(attrs, 1).unwrap();
    sample.push(vec![0.0, 0.0]).unwrap();
    sample.push(vec![1.0, 1.0]).unwrap();

    let tree = DecisionTreeBuilder::new(NaiveBayes::new()).build();
    let f = tree.fit(&sample).unwrap();
    assert_eq!(f.n_leaves(), 3);

    let query = Instance::new(vec![2.0, MISSING]);
    assert_eq!(f.distribution(&query).unwrap(), vec![0.0, 0.0]);
    assert_eq!(f.predict(&query).unwrap(), None);

    let text = f.to_string();
    assert!(text.contains("a = z: null"), "{text}");
}


#[test]
fn display_follows_the_tree() {
    let sample = separable();
    let tree = DecisionTreeBuilder::new(NaiveBayes::new()).build();
    let f = tree.fit(&sample).unwrap();
    assert_eq!(f.to_string(), "Id3\n\n\na = 0: 0\na = 1: 1");

    let sample = weather();
    let f = tree.fit(&sample).unwrap();
    let text = f.to_string();
    assert!(text.starts_with("Id3\n\n\noutlook = sunny: no"), "{text}");
    assert!(text.contains("\n|  windy = yes: no"), "{text}");
}


#[test]
fn criteria_select_the_separating_attribute() {
    let sample = weather();
    let criteria = [
        (Criterion::InformationGain, false),
        (Criterion::GainOverValueCount, false),
        (Criterion::GainOverValueCount, true),
        (Criterion::GainRatio, false),
        (Criterion::GainRatio, true),
    ];
    for (criterion, above_average_gain) in criteria {
        let f = DecisionTreeBuilder::new(ClassFrequency::new())
            .criterion(criterion)
            .above_average_gain(above_average_gain)
            .build()
            .fit(&sample)
            .unwrap();
        match f.root() {
            Node::Branch { attribute, .. } => assert_eq!(*attribute, 0),
            Node::Leaf { .. } => panic!("{criterion} made a leaf"),
        }
        // every training record is classified correctly.
        let predictions = f.predict_all(&sample).unwrap();
        for (i, p) in predictions.into_iter().enumerate() {
            assert_eq!(p, Some(sample.class_value(i) as usize));
        }
    }
}


#[test]
fn records_with_missing_class_are_dropped() {
    let mut sample = separable();
    sample.push(vec![0.0, 0.0, MISSING]).unwrap();
    let f = DecisionTreeBuilder::new(ClassFrequency::new())
        .build()
        .fit(&sample)
        .unwrap();
    assert_eq!(f.depth(), 1);
}


#[test]
fn numeric_attribute_is_rejected() {
    let attrs = vec![
        Attribute::numeric("x"),
        Attribute::nominal("class", ["0", "1"]),
    ];
    let mut sample = Sample::new(attrs, 1).unwrap();
    sample.push(vec![0.5, 0.0]).unwrap();

    let tree = DecisionTreeBuilder::new(NaiveBayes::new()).build();
    let result = tree.fit(&sample);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}


#[test]
fn empty_sample_is_unbuildable() {
    let sample = separable().empty_like();
    let tree = DecisionTreeBuilder::new(NaiveBayes::new()).build();
    let result = tree.fit(&sample);
    assert!(matches!(result, Err(Error::Unbuildable(_))));
}


#[test]
fn missing_split_value_is_invalid() {
    let sample = separable();
    let f = DecisionTreeBuilder::new(NaiveBayes::new())
        .build()
        .fit(&sample)
        .unwrap();

    let query = Instance::new(vec![MISSING, 0.0, MISSING]);
    let result = f.distribution(&query);
    assert!(matches!(result, Err(Error::InvalidInput(_))));

    let query = Instance::new(vec![2.0, 0.0, 0.0]);
    assert!(f.distribution(&query).is_err());

    let query = Instance::new(vec![0.0, 0.0]);
    assert!(f.distribution(&query).is_err());
}


#[test]
fn json_round_trip_keeps_predictions() {
    let sample = weather();
    let f = DecisionTreeBuilder::new(NaiveBayes::new())
        .leaf_fitting(LeafFitting::Cached)
        .build()
        .fit(&sample)
        .unwrap();

    let json = f.to_json().unwrap();
    let g = DecisionTreeClassifier::<NaiveBayes>::from_json(&json).unwrap();
    assert_eq!(f.predict_all(&sample).unwrap(), g.predict_all(&sample).unwrap());

    let mut path = std::env::temp_dir();
    path.push("minitrees_dtree_test.json");
    f.save_json(&path).unwrap();
    let h = DecisionTreeClassifier::<NaiveBayes>::load_json(&path).unwrap();
    assert_eq!(h.to_string(), f.to_string());
    std::fs::remove_file(&path).unwrap();
}


#[test]
fn dot_file_is_written() {
    let sample = weather();
    let f = DecisionTreeBuilder::new(NaiveBayes::new())
        .build()
        .fit(&sample)
        .unwrap();

    let mut path = std::env::temp_dir();
    path.push("minitrees_dtree_test.dot");
    f.to_dot_file(&path).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.contains("outlook ?"));
    assert!(dot.trim_end().ends_with('}'));
    std::fs::remove_file(&path).unwrap();
}


#[test]
fn estimator_info_is_reported() {
    let tree = DecisionTreeBuilder::new(NaiveBayes::new())
        .criterion(Criterion::GainRatio)
        .build();
    assert_eq!(tree.name(), "ID3 Decision Tree");
    let info = tree.info().unwrap();
    assert!(info.iter().any(|(k, v)| *k == "Criterion" && v == "Gain ratio"));
    assert!(tree.to_string().contains("Leaf estimator: Naive Bayes"));
}
