//! Comentarios de ejemplo de una consulta pública, para rellenar el formulario.

pub const SAMPLE_COMMENTS: [&str; 20] = [
    "The proposed amendments are very beneficial for small businesses and will promote entrepreneurship in the country.",
    "I find some provisions quite restrictive and unfavorable for existing companies. This needs reconsideration.",
    "The draft legislation lacks clarity in certain sections, particularly regarding compliance requirements.",
    "Great initiative by MCA, looking forward to the implementation of these progressive changes.",
    "Some parts are good, but overall the document needs improvement in terms of implementation guidelines.",
    "The amendments will create unnecessary hurdles for startups and new businesses entering the market.",
    "This consultation process is very inclusive and transparent. Appreciate the opportunity to provide feedback.",
    "I am concerned about the environmental impact assessment requirements mentioned in section 12.",
    "The document is well-written and comprehensive, covering most aspects of corporate governance.",
    "Need more clarity on compliance requirements and penalty structures for non-compliance.",
    "The proposed changes will significantly reduce bureaucratic red tape for businesses.",
    "Section 15 regarding foreign investment guidelines seems too restrictive and may deter investors.",
    "Excellent work on digitization aspects. This will make processes more efficient.",
    "The timeline for implementation seems too aggressive. Companies need more time to adapt.",
    "Overall positive changes, but certain provisions need refinement based on industry feedback.",
    "The amendments align well with international best practices in corporate governance.",
    "Concerned about the additional compliance burden on small and medium enterprises.",
    "The provisions for whistleblower protection are commendable and much needed.",
    "Some technical terms need better explanation for better understanding by stakeholders.",
    "The draft addresses key issues in corporate transparency and accountability effectively.",
];

/// Texto listo para el área de entrada: un comentario por línea.
pub fn sample_text() -> String {
    SAMPLE_COMMENTS.join("\n")
}
