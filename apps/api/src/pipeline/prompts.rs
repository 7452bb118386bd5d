// Prompt templates for the two pipeline steps.
// Replace `{resume}` and `{job_desc}` before sending; rendering never touches the network.

pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert technical HR analyst.
Evaluate the following RESUME against the JOB DESCRIPTION.

=== RESUME ===
{resume}

=== JOB DESCRIPTION ===
{job_desc}

Return the output in structured Markdown format:

Candidate Strengths
(Summarize in 3–5 bullet points)

Areas for Improvement
(Give precise actionable suggestions)

Role Fit Recommendation
(Suggest 2–3 best-matched job titles)"#;

pub const LETTER_PROMPT_TEMPLATE: &str = r#"You are a professional career writer.
Using the resume and job description below, generate a short (150–200 word)
cover letter highlighting the top 2–3 relevant skills and achievements.

=== RESUME ===
{resume}

=== JOB DESCRIPTION ===
{job_desc}

Format:
Dear Hiring Manager,
[Body paragraphs]
Sincerely,
[Candidate Name]"#;

/// Section headers the analysis prompt asks the model to produce.
pub const ANALYSIS_SECTIONS: [&str; 3] = [
    "Candidate Strengths",
    "Areas for Improvement",
    "Role Fit Recommendation",
];

pub fn render_analysis_prompt(resume: &str, job_desc: &str) -> String {
    fill(ANALYSIS_PROMPT_TEMPLATE, resume, job_desc)
}

pub fn render_letter_prompt(resume: &str, job_desc: &str) -> String {
    fill(LETTER_PROMPT_TEMPLATE, resume, job_desc)
}

// Single pass so placeholder-looking text inside the resume is left alone.
fn fill(template: &str, resume: &str, job_desc: &str) -> String {
    let mut out = String::with_capacity(template.len() + resume.len() + job_desc.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{resume}") {
            out.push_str(resume);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{job_desc}") {
            out.push_str(job_desc);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
