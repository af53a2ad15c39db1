/// Sample equations offered in the UI, as (label, TeX source) pairs.
pub const SAMPLES: &[(&str, &str)] = &[
    ("Mass-energy equivalence", r"E = mc^2"),
    (
        "Gaussian integral",
        r"\int_0^\infty e^{-x^2} dx = \frac{\sqrt{\pi}}{2}",
    ),
    (
        "Basel problem",
        r"\sum_{n=1}^{\infty} \frac{1}{n^2} = \frac{\pi^2}{6}",
    ),
    (
        "Maxwell-Faraday equation",
        r"\nabla \times \mathbf{E} = -\frac{\partial \mathbf{B}}{\partial t}",
    ),
    (
        "Quadratic formula",
        r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}",
    ),
    ("Euler's identity", r"e^{i\pi} + 1 = 0"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_single_line() {
        for (name, tex) in SAMPLES {
            assert!(!tex.contains('\n'), "sample {} spans lines", name);
            assert!(!tex.trim().is_empty());
        }
    }
}
