/// Accuracy of predicted decisions
pub mod classification;
/// Entropy, information gain and gain ratio
pub mod information;
