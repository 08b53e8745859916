//! Immutable timeline content: milestones, era overviews and the quiz bank.
//!
//! A `Catalog` is built once at startup and shared read-only (usually behind
//! an `Arc`). Catalog order is the display order and defines `MilestoneId`.

use std::collections::BTreeSet;

use crate::model::{DecadeLabel, EraOverview, Milestone, MilestoneId, OptionIndex, QuizQuestion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    milestones: Vec<Milestone>,
    eras: Vec<EraOverview>,
    quiz: Vec<QuizQuestion>,
}

impl Catalog {
    #[must_use]
    pub fn new(milestones: Vec<Milestone>, eras: Vec<EraOverview>, quiz: Vec<QuizQuestion>) -> Self {
        Self {
            milestones,
            eras,
            quiz,
        }
    }

    /// The history-of-computer-graphics content shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_milestones(), builtin_eras(), builtin_quiz())
    }

    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    #[must_use]
    pub fn get(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.get(id.index())
    }

    #[must_use]
    pub fn eras(&self) -> &[EraOverview] {
        &self.eras
    }

    #[must_use]
    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// Distinct decades present in the catalog, oldest first.
    #[must_use]
    pub fn decades(&self) -> Vec<DecadeLabel> {
        self.milestones
            .iter()
            .map(Milestone::decade)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn milestone(year: i32, title: &str, description: &str, tags: &[&str], image: &str) -> Milestone {
    Milestone::new(
        year,
        title,
        description,
        tags.iter().map(|tag| (*tag).to_string()).collect(),
        Some(image.to_string()),
    )
}

fn question(prompt: &str, options: [&str; 4], correct: OptionIndex) -> QuizQuestion {
    QuizQuestion::new(prompt, options.map(str::to_string), correct)
}

fn builtin_milestones() -> Vec<Milestone> {
    vec![
        milestone(
            1950,
            "Pantallas CRT en investigación",
            "Uso de tubos de rayos catódicos (CRT) en radares y simuladores; base para visualización electrónica.",
            &["CRT", "visualización", "radares"],
            "crt.png",
        ),
        milestone(
            1957,
            "Primera imagen digitalizada (Kirsch)",
            "Russell Kirsch digitaliza una fotografía con la computadora SEAC; inicio de la imagen digital.",
            &["imagen digital", "SEAC", "Kirsch"],
            "kirsch.png",
        ),
        milestone(
            1963,
            "Sketchpad (Ivan Sutherland)",
            "Sistema pionero CAD con lápiz óptico: selección, arrastre, zoom y estructuras jerárquicas de objetos.",
            &["CAD", "Sketchpad", "interacción"],
            "sketchpad.png",
        ),
        milestone(
            1968,
            "Mother of All Demos (Engelbart)",
            "Presentación de NLS: mouse, ventanas, hipervínculos, edición y colaboración; clave para interfaces gráficas.",
            &["GUI", "NLS", "interfaz"],
            "nls.png",
        ),
        milestone(
            1972,
            "Pong",
            "Uno de los primeros videojuegos comerciales; impulso a gráficos interactivos en tiempo real.",
            &["videojuegos", "Atari"],
            "pong.png",
        ),
        milestone(
            1973,
            "SuperPaint",
            "Primeros sistemas con frame buffer en color; edición y pintura digital temprana.",
            &["raster", "framebuffer"],
            "superpaint.png",
        ),
        milestone(
            1984,
            "GUI en computadoras personales",
            "Popularización de entornos gráficos (Macintosh) y posterior adopción masiva (Windows).",
            &["GUI", "Mac", "Windows"],
            "gui80s.png",
        ),
        milestone(
            1992,
            "OpenGL",
            "API estándar multiplataforma para gráficos 2D/3D; cataliza gráficos interactivos y científicos.",
            &["OpenGL", "API", "3D"],
            "opengl.png",
        ),
        milestone(
            1995,
            "Toy Story",
            "Primer largometraje completamente por animación 3D; hito de la industria CGI.",
            &["cine", "CGI", "Pixar"],
            "toystory.png",
        ),
        milestone(
            1999,
            "GPUs y sombreadores programables",
            "Las GPUs dan salto a programabilidad (shaders); rendimiento masivo en gráficos 3D.",
            &["GPU", "shaders"],
            "gpu99.png",
        ),
        milestone(
            2006,
            "Programación de shaders consolidada",
            "Sombreadores de vértice/píxel/geom. ampliamente usados en videojuegos y visualización.",
            &["shaders", "programable"],
            "shaders.png",
        ),
        milestone(
            2018,
            "Ray tracing en tiempo real",
            "Soporte de hardware para trazado de rayos en tiempo real (línea RTX); realismo de iluminación.",
            &["ray tracing", "RTX"],
            "rtx.png",
        ),
        milestone(
            2020,
            "VR/AR y altas resoluciones",
            "Aplicaciones inmersivas, 4K/8K, simulaciones complejas y uso transversal en ciencia, medicina y educación.",
            &["VR", "AR", "4K/8K"],
            "vrar.png",
        ),
    ]
}

fn builtin_eras() -> Vec<EraOverview> {
    vec![
        EraOverview::new(
            "1950-1960",
            "Durante las décadas de 1950 y 1960, los gráficos por computadora eran muy primitivos. \
             Se utilizaban osciloscopios para mostrar imágenes simples. Ivan Sutherland desarrolló \
             Sketchpad en 1963, el primer sistema de dibujo interactivo, considerado un hito \
             fundamental en la historia de la graficación.",
        ),
        EraOverview::new(
            "1970",
            "En los años 70, se introdujeron bibliotecas gráficas básicas y se empezó a utilizar la \
             rasterización. Los gráficos comenzaron a aplicarse en CAD y en simulaciones científicas. \
             La interfaz gráfica de usuario aún no era común.",
        ),
        EraOverview::new(
            "1980",
            "Los años 80 vieron el nacimiento de las tarjetas gráficas y los primeros gráficos 3D. \
             La graficación se expandió al entretenimiento con videojuegos básicos en 2D y \
             herramientas de diseño asistido por computadora.",
        ),
        EraOverview::new(
            "1990-2000",
            "Esta fue una época de crecimiento acelerado en el campo. Se popularizaron APIs como \
             OpenGL y DirectX. Los videojuegos y animaciones 3D dominaron el mercado. Las GPUs se \
             volvieron esenciales para el procesamiento gráfico.",
        ),
        EraOverview::new(
            "2010 en adelante",
            "En la actualidad, la graficación por computadora se usa en realidad virtual, \
             aumentada, inteligencia artificial, videojuegos ultra realistas y simulaciones \
             científicas complejas en tiempo real.",
        ),
    ]
}

fn builtin_quiz() -> Vec<QuizQuestion> {
    vec![
        question(
            "¿Quién desarrolló Sketchpad, considerado pionero del CAD interactivo?",
            ["Ivan Sutherland", "Douglas Engelbart", "John Whitney", "Alan Kay"],
            OptionIndex::A,
        ),
        question(
            "¿Qué hito permitió iluminación más realista en tiempo real a partir de 2018?",
            [
                "Mapeado de normales",
                "Ray tracing con soporte de hardware",
                "Phong shading",
                "Wireframe puro",
            ],
            OptionIndex::B,
        ),
        question(
            "¿Cuál fue uno de los primeros videojuegos comerciales que impulsó los gráficos interactivos?",
            ["Spacewar!", "Pong", "Breakout", "Doom"],
            OptionIndex::B,
        ),
        question(
            "OpenGL (1992) es principalmente...",
            [
                "Un sistema operativo",
                "Un lenguaje de shading propietario",
                "Una API estándar para gráficos",
                "Un formato de imagen",
            ],
            OptionIndex::C,
        ),
        question(
            "La 'Mother of All Demos' (1968) mostró:",
            [
                "Pantallas táctiles capacitivas",
                "Mouse, ventanas e hipervínculos",
                "Headsets de VR comerciales",
                "Smartphones",
            ],
            OptionIndex::B,
        ),
        question(
            "Toy Story (1995) es relevante porque:",
            [
                "Fue la primera película en 3D estereoscópico",
                "Fue el primer largometraje totalmente hecho con animación 3D",
                "Usó por primera vez GPUs programables",
                "Se dibujó a mano y luego se digitalizó",
            ],
            OptionIndex::B,
        ),
        question(
            "Las GPUs programables popularizaron el uso de:",
            ["Shaders", "Disquetes", "Microfilms", "Tubos de vacío"],
            OptionIndex::A,
        ),
        question(
            "SuperPaint aportó tempranamente:",
            [
                "Ray tracing en tiempo real",
                "Render de path tracing",
                "Frame buffer en color y pintura digital",
                "Pantallas OLED",
            ],
            OptionIndex::C,
        ),
    ]
}
