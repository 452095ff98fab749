use minitrees::prelude::*;
use minitrees::Error;


// Toy example
//
//  sky   | wind   | class
// -------+--------+------
//  sunny | strong |  no
//  sunny | weak   |  yes
//  rainy | strong |  no
//  rainy | weak   |  no
//  sunny | weak   |  yes
fn toy() -> Sample {
    let attrs = vec![
        Attribute::nominal("sky", ["sunny", "rainy"]),
        Attribute::nominal("wind", ["strong", "weak"]),
        Attribute::nominal("class", ["no", "yes"]),
    ];
    let mut sample = Sample::new(attrs, 2).unwrap();
    sample.push(vec![0.0, 0.0, 0.0]).unwrap();
    sample.push(vec![0.0, 1.0, 1.0]).unwrap();
    sample.push(vec![1.0, 0.0, 0.0]).unwrap();
    sample.push(vec![1.0, 1.0, 0.0]).unwrap();
    sample.push(vec![0.0, 1.0, 1.0]).unwrap();
    sample
}


#[test]
fn naive_bayes_toy_test() {
    let sample = toy();
    let f = NaiveBayes::new().fit(&sample).unwrap();

    // P(no)  = (3 + 1) / (5 + 2), P(yes) = (2 + 1) / (5 + 2)
    assert!((f.prior(0) - 4.0 / 7.0).abs() < 1e-12);
    assert!((f.prior(1) - 3.0 / 7.0).abs() < 1e-12);

    // P(sky = sunny | no) = (1 + 1) / (3 + 2)
    assert!((f.likelihood(0, 0, 0) - 2.0 / 5.0).abs() < 1e-12);
    // P(sky = sunny | yes) = (2 + 1) / (2 + 2)
    assert!((f.likelihood(1, 0, 0) - 3.0 / 4.0).abs() < 1e-12);

    // sunny & weak
    let query = Instance::new(vec![0.0, 1.0, MISSING]);
    let p_no = 4.0 / 7.0 * 2.0 / 5.0 * 2.0 / 5.0;
    let p_yes = 3.0 / 7.0 * 3.0 / 4.0 * 3.0 / 4.0;
    let dist = f.distribution(&query).unwrap();
    assert!((dist[0] - p_no / (p_no + p_yes)).abs() < 1e-9);
    assert!((dist[1] - p_yes / (p_no + p_yes)).abs() < 1e-9);
    assert_eq!(f.predict(&query).unwrap(), Some(1));

    let ln = f.log_probabilities(&query).unwrap();
    assert!((ln[0] - p_no.ln()).abs() < 1e-9);
}


#[test]
fn missing_values_do_not_contribute() {
    let sample = toy();
    let f = NaiveBayes::new().fit(&sample).unwrap();

    let query = Instance::new(vec![MISSING, MISSING, MISSING]);
    let dist = f.distribution(&query).unwrap();
    assert!((dist[0] - 4.0 / 7.0).abs() < 1e-9);
    assert!((dist[1] - 3.0 / 7.0).abs() < 1e-9);
}


#[test]
fn numeric_attribute_is_rejected() {
    let attrs = vec![
        Attribute::numeric("x"),
        Attribute::nominal("class", ["0", "1"]),
    ];
    let mut sample = Sample::new(attrs, 1).unwrap();
    sample.push(vec![0.5, 1.0]).unwrap();

    let result = NaiveBayes::new().fit(&sample);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}


#[test]
fn empty_sample_is_unbuildable() {
    let result = NaiveBayes::new().fit(&toy().empty_like());
    assert!(matches!(result, Err(Error::Unbuildable(_))));
}


#[test]
fn query_must_match_the_header() {
    let f = NaiveBayes::new().fit(&toy()).unwrap();
    assert!(f.distribution(&Instance::new(vec![0.0, 1.0])).is_err());
    assert!(f.distribution(&Instance::new(vec![0.0, 5.0, 0.0])).is_err());
}
