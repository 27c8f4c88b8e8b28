//! Synthetic résumés, one per template generation the extractor understands.
//! Every variant carries the same facts so tests can compare results.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    /// `\section*{UPPER}`, `\textbf{Label}: list`, pipe-delimited role lines.
    PipeHeader,
    /// Single-line skills joined by pipes, `Product: | Domain:` descriptors.
    PipeCategories,
    /// `\resumeSubheading` / `\resumeItem` commands, itemized skills.
    Subheading,
    /// Skills in a tabular, `\role{..}{..}{..}{..}` headers.
    Tabular,
    /// `\section{Title}`, `\role` headers, `\textit{\small product}` lines.
    RoleCommand,
}

pub const ALL_VARIANTS: [Variant; 5] = [
    Variant::PipeHeader,
    Variant::PipeCategories,
    Variant::Subheading,
    Variant::Tabular,
    Variant::RoleCommand,
];

impl Variant {
    pub fn document(self) -> &'static str {
        match self {
            Variant::PipeHeader => PIPE_HEADER,
            Variant::PipeCategories => PIPE_CATEGORIES,
            Variant::Subheading => SUBHEADING,
            Variant::Tabular => TABULAR,
            Variant::RoleCommand => ROLE_COMMAND,
        }
    }
}

const PLATFORM_SKILLS: &str = "Terraform, Kubernetes (EKS, GKE (Autopilot)), Helm";

/// A document holding nothing but a skills section with one `Platform`
/// category, written the way `variant` writes skills.
pub fn skills_only(variant: Variant) -> String {
    match variant {
        Variant::PipeHeader => format!(
            "\\section*{{TECHNICAL SKILLS}}\n\\textbf{{Platform}}: {PLATFORM_SKILLS} \\\\\n"
        ),
        Variant::PipeCategories => {
            format!("\\section*{{SKILLS}}\n\\textbf{{Platform:}} {PLATFORM_SKILLS}\n")
        }
        Variant::Subheading => format!(
            "\\section{{Technical Skills}}\n\\begin{{itemize}}\n  \\item \\textbf{{Platform:}} {PLATFORM_SKILLS}\n\\end{{itemize}}\n"
        ),
        Variant::Tabular => format!(
            "\\section*{{TECHNICAL SKILLS}}\n\\begin{{tabular}}{{ll}}\n\\textbf{{Platform}} & {PLATFORM_SKILLS} \\\\\n\\end{{tabular}}\n"
        ),
        Variant::RoleCommand => format!(
            "\\section{{Technical Skills}}\n\\footnotesize\n\\textbf{{Platform:}} {PLATFORM_SKILLS} \\\\\n"
        ),
    }
}

const PIPE_HEADER: &str = r"\documentclass[11pt]{article}
\usepackage{hyperref}
\begin{document}
\begin{center}
{\LARGE\bfseries Jane Doe}\\
Email: jane.doe@example.com \textbar{} Phone: +91-98765-43210 \textbar{} Location: Bengaluru, India\\
LinkedIn: jane-doe \textbar{} GitHub: janedoe
\end{center}

\section*{PROFESSIONAL SUMMARY}
\footnotesize Platform engineer with \textbf{8+ years} of Kubernetes and cloud cost work.

\section*{TECHNICAL SKILLS}
\textbf{Languages}: Go, Python, Bash \\
\textbf{Cloud \& Infrastructure}: AWS, Kubernetes (EKS, GKE), Terraform \\

\section*{PROFESSIONAL EXPERIENCE}
\textbf{Staff Engineer} | Acme (YC W18) | Bengaluru, India | 03/2021 -- Present \\
\textit{\small Merchant payments platform}
\begin{itemize}
  \item Built a multi-tenant \textbf{Kubernetes} platform
  \item Cut cloud spend by \textbf{60\%} across 90+ services
\end{itemize}
\textbf{Site Reliability Engineer} | Globex | Remote | 01/2019 -- 02/2021 \\
\begin{itemize}
  \item Ran the on-call rotation
\end{itemize}

\section*{EDUCATION \& CERTIFICATIONS}
\textbf{B.E. Information Technology} -- UIT RGPV, Bhopal \\
\textbf{Certifications}: CKA, Terraform Associate, AWS SA (Associate, Professional)
\end{document}
";

const PIPE_CATEGORIES: &str = r"\documentclass[11pt]{article}
\begin{document}
\begin{center}
\textbf{\Huge Jane Doe} \\
\href{mailto:jane.doe@example.com}{jane.doe@example.com} $|$ +91-98765-43210 $|$ Bengaluru, India \\
\href{https://www.linkedin.com/in/jane-doe}{linkedin.com/in/jane-doe} $|$ \href{https://github.com/janedoe}{github.com/janedoe}
\end{center}

\section*{SUMMARY}
Platform engineer with 8+ years of Kubernetes and cloud cost work.
\vspace{2pt}

\section*{SKILLS}
\textbf{Languages:} Go, Python, Bash | Cloud \& Infrastructure: AWS, Kubernetes (EKS, GKE), Terraform

\section*{EXPERIENCE}
\textbf{Staff Engineer} $|$ Acme (YC W18) $|$ Bengaluru, India \hfill 03/2021 \-- Present \\
\textit{Product: Merchant payments platform \textbar{} Domain: Fintech}
\begin{itemize}
\item Built a multi-tenant \textbf{Kubernetes} platform
\item Cut cloud spend by \textbf{60\%} across 90+ services
\end{itemize}
\textbf{Site Reliability Engineer} $|$ Globex $|$ Remote \hfill 01/2019 \-- 02/2021
\begin{itemize}
\item Ran the on-call rotation
\end{itemize}

\section*{EDUCATION}
\textbf{B.E. Information Technology} -- UIT RGPV, Bhopal \hfill 2017 \\
\textbf{Certifications:} CKA | Terraform Associate | AWS SA (Associate, Professional)
\end{document}
";

const SUBHEADING: &str = r"\documentclass[letterpaper,11pt]{article}
\begin{document}
\begin{center}
    {\Huge \scshape Jane Doe} \\ \vspace{1pt}
    Bengaluru, India $|$ \small +91-98765-43210 $|$
    \href{mailto:jane.doe@example.com}{\underline{jane.doe@example.com}} $|$
    \href{https://linkedin.com/in/jane-doe}{\underline{linkedin.com/in/jane-doe}} $|$
    \href{https://github.com/janedoe}{\underline{github.com/janedoe}}
\end{center}

\section{Summary}
Platform engineer with 8+ years of Kubernetes and cloud cost work.

\section{Technical Skills}
\begin{itemize}[leftmargin=0.15in, label={}]
  \item \textbf{Languages:} Go, Python, Bash
  \item \textbf{Cloud \& Infrastructure:} AWS, Kubernetes (EKS, GKE), Terraform
\end{itemize}

\section{Experience}
\resumeSubHeadingListStart
  \resumeSubheading{Staff Engineer}{03/2021 \-- Present}{Acme (YC W18)}{Bengaluru, India}
  \resumeItemListStart
    \resumeItem{Built a multi-tenant \textbf{Kubernetes} platform}
    \resumeItem{Cut cloud spend by \textbf{60\%} across 90+ services}
  \resumeItemListEnd
  \resumeSubheading{Site Reliability Engineer}{01/2019 \-- 02/2021}{Globex}{Remote}
  \resumeItemListStart
    \resumeItem{Ran the on-call rotation}
  \resumeItemListEnd
\resumeSubHeadingListEnd

\section{Education}
\resumeSubHeadingListStart
  \resumeSubheading{UIT RGPV, Bhopal}{2013 \-- 2017}{B.E. Information Technology}{Bhopal, India}
\resumeSubHeadingListEnd
\textbf{Certifications:} CKA, Terraform Associate, AWS SA (Associate, Professional)
\end{document}
";

const TABULAR: &str = r"\documentclass{article}
\newcommand{\role}[4]{\textbf{#1} \hfill #4 \\ \textit{#2} \hfill #3}
\begin{document}
{\Large \bfseries Jane Doe} \hfill Bengaluru, India \\
Phone: +91-98765-43210 $\cdot$ \href{mailto:jane.doe@example.com}{Email} $\cdot$
\href{https://linkedin.com/in/jane-doe}{LinkedIn} $\cdot$ \href{https://github.com/janedoe}{GitHub}

\section*{PROFILE}
Platform engineer with 8+ years of Kubernetes and cloud cost work.

\section*{TECHNICAL SKILLS}
\begin{tabular}{@{}ll}
\textbf{Languages} & Go, Python, Bash \\
\textbf{Cloud \& Infrastructure} & AWS, Kubernetes (EKS, GKE), Terraform \\
\end{tabular}

\section*{PROFESSIONAL EXPERIENCE}
\role{Staff Engineer}{Acme (YC W18)}{Bengaluru, India}{03/2021 \-- Present}
\textit{\small Merchant payments platform}
\begin{itemize}
  \item Built a multi-tenant \textbf{Kubernetes} platform
  \item Cut cloud spend by \textbf{60\%} across 90+ services
\end{itemize}
\role{Site Reliability Engineer}{Globex}{Remote}{01/2019 \-- 02/2021}
\begin{itemize}
  \item Ran the on-call rotation
\end{itemize}

\section*{EDUCATION}
\textbf{B.E. Information Technology} \-- UIT RGPV, Bhopal \\
\textbf{Certifications:} CKA $|$ Terraform Associate $|$ AWS SA (Associate, Professional)
\end{document}
";

const ROLE_COMMAND: &str = r"\documentclass[10pt]{article}
\begin{document}
\begin{center}
{\LARGE\bfseries Jane Doe}\\[2pt]
\small
\href{mailto:jane.doe@example.com}{jane.doe@example.com} \textbar{}
+91-98765-43210 \textbar{}
\href{https://linkedin.com/in/jane-doe}{LinkedIn} \textbar{}
\href{https://github.com/janedoe}{GitHub} \textbar{}
Bengaluru, India
\end{center}

\section{Professional Summary}
\footnotesize
Platform engineer with 8+ years of Kubernetes and cloud cost work.
\vspace{4pt}

\section{Technical Skills}
\footnotesize
\textbf{Languages:} Go, Python, Bash \\
\textbf{Cloud \& Infrastructure:} AWS, Kubernetes (EKS, GKE), Terraform \\
% ============================================

\section{Professional Experience}
\role{Staff Engineer}{Acme (YC W18)}{Bengaluru, India}{03/2021 \-- Present}
\textit{\small Merchant payments platform}
\begin{itemize}[leftmargin=*]
  \item Built a multi-tenant \textbf{Kubernetes} platform
  \item Cut cloud spend by \textbf{60\%} across 90+ services
\end{itemize}
\role{Site Reliability Engineer}{Globex}{Remote}{01/2019 \-- 02/2021}
\begin{itemize}[leftmargin=*]
  \item Ran the on-call rotation
\end{itemize}

\section{Education \& Certifications}
\textbf{B.E. Information Technology} -- UIT RGPV, Bhopal \\
\textbf{Certifications:} CKA \textbar{} Terraform Associate \textbar{} AWS SA (Associate, Professional)
\end{document}
";
