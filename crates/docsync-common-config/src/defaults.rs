//! Stock prose and file lists used when the config file does not override them.

pub const README_TITLE: &str = "FudiGPT - Documentación Principal";

pub const README_INTRO: &str =
    "Este documento proporciona un resumen actualizado del estado del proyecto FudiGPT.";

pub const README_DESCRIPTION: &str = r#"
# FudiGPT

FudiGPT es un gerente operativo con superpoderes, listo para actuar 24/7 en el corazón del restaurante.

## ¿Qué es FudiGPT?

FudiGPT es un asistente AI entrenado para conversar, entender y resolver problemas reales en restaurantes — desde costos de insumos hasta desempeño de platillos. Se conecta directo al POS (como Poster), analiza datos reales tal como vienen, y responde con empatía, claridad y estrategia.

Donde otros bots se rompen, FudiGPT propone.
Donde otros exigen datos limpios, FudiGPT se adapta.
Donde otros entregan dashboards, FudiGPT conversa con inteligencia.
"#;

pub const README_STRUCTURE: &str = r#"
## Estructura del Proyecto

- **src/**: Código fuente de la aplicación React
  - **components/**: Componentes reutilizables de UI
  - **contexts/**: Contextos de React (autenticación, tema, etc.)
  - **pages/**: Páginas principales de la aplicación
  - **services/**: Servicios para integración con APIs externas
  - **utils/**: Utilidades y funciones auxiliares
- **docs/**: Documentación del proyecto
  - **adr/**: Registro de Decisiones Arquitectónicas
  - **session-reports/**: Reportes de sesiones de desarrollo
- **functions/**: Cloud Functions para Firebase
- **poster-sync/**: Servicios para sincronización con Poster POS
"#;

pub const README_DEPLOYMENT: &str = r#"
## Despliegue

El proyecto se despliega automáticamente en Firebase Hosting a través de GitHub Actions cuando se hace push a la rama master.

URL de producción: https://fudigpt.com
"#;

pub const README_NEXT_STEPS: &str = r#"
## Próximos Pasos

Consulta los siguientes archivos para obtener información detallada sobre los próximos pasos:

- [Próximos pasos generales](docs/next-steps.md)
- [Plan de integración con Poster](docs/poster-integration.md)
"#;

pub const README_FOOTER: &str = r#"
---

Para contribuir al proyecto, por favor consulta [CONTRIBUTING.md](.github/CONTRIBUTING.md).
"#;

pub const STATUS_TITLE: &str = "Reporte de Estado del Proyecto FudiGPT";

pub const STATUS_INTRO: &str =
    "Este documento proporciona una visión general del estado actual del proyecto.";

pub const STATUS_NEXT_STEPS: &str = r#"## Próximos Pasos

Para ver los próximos pasos planificados, consulta:
- [Próximos pasos generales](./next-steps.md)
- [Integración con Poster](./poster-integration.md)

"#;

pub const STATUS_FOOTER: &str = r#"---

*Este reporte se genera automáticamente mediante GitHub Actions. Si detectas información incorrecta, por favor actualiza el script generador.*
"#;

pub const MARKERS_TITLE: &str = "Configuración de Firebase";

pub const MARKER_FILES: [&str; 4] = [".firebaserc", "firebase.json", "firestore.rules", "storage.rules"];

/// Components checked by the status report, as `(display name, path under src)`.
pub const COMPONENTS: [(&str, &str); 5] = [
    ("Autenticación", "contexts/AuthContext.js"),
    ("Chat Interface", "pages/ChatPage.js"),
    ("Conexión con Poster", "services/poster/"),
    ("Temas (Claro/Oscuro)", "contexts/ThemeContext.js"),
    ("Servicios AI", "services/ai.js"),
];
