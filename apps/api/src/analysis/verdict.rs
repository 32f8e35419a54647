//! One-line verdict for the report header.

const NOT_A_RESUME: &str = "This document doesn't appear to be a resume. Please upload a proper resume with sections like Experience, Education, Skills, and contact information.";
const FEW_CHARACTERISTICS: &str = "This document has very few resume characteristics. Make sure it has proper section headings, contact info, dates, and bullet points.";
const EXCELLENT: &str = "Excellent! Your resume is highly optimized for ATS systems. Fine-tune with the tips below to reach perfection.";
const GOOD: &str = "Good resume! You're above average, but several improvements could significantly boost your ATS pass rate.";
const DECENT: &str = "Decent foundation, but needs work. Follow the priority tips below to improve your chances significantly.";
const BELOW_AVERAGE: &str = "Below average ATS compatibility. Multiple critical areas need attention; focus on the high-priority tips first.";
const NEEDS_WORK: &str = "Significant improvements needed. Your resume will likely be filtered out by most ATS systems. Start with the top recommendations.";

/// Low confidence overrides the score bands.
pub fn select_verdict(confidence: f64, overall_score: u32) -> &'static str {
    if confidence < 0.3 {
        return NOT_A_RESUME;
    }
    if confidence < 0.5 {
        return FEW_CHARACTERISTICS;
    }
    match overall_score {
        85.. => EXCELLENT,
        70..=84 => GOOD,
        55..=69 => DECENT,
        40..=54 => BELOW_AVERAGE,
        _ => NEEDS_WORK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_overrides_score() {
        assert_eq!(select_verdict(0.1, 100), NOT_A_RESUME);
        assert_eq!(select_verdict(0.45, 100), FEW_CHARACTERISTICS);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(select_verdict(0.9, 85), EXCELLENT);
        assert_eq!(select_verdict(0.9, 84), GOOD);
        assert_eq!(select_verdict(0.9, 70), GOOD);
        assert_eq!(select_verdict(0.9, 55), DECENT);
        assert_eq!(select_verdict(0.5, 40), BELOW_AVERAGE);
        assert_eq!(select_verdict(0.9, 39), NEEDS_WORK);
        assert_eq!(select_verdict(1.0, 0), NEEDS_WORK);
    }

    #[test]
    fn test_not_a_resume_message() {
        assert!(select_verdict(0.0, 0).contains("doesn't appear to be a resume"));
    }
}
