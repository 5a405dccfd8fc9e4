//! French prompts sent to the vision model.
//!
//! The analysis prompt pins the image-half to eye mapping: the LEFT half of
//! the OCT image is the patient's RIGHT eye (`right_eye`), the RIGHT half is
//! the LEFT eye (`left_eye`).

pub const ANALYSIS_SYSTEM_PROMPT: &str = "Tu es un ophtalmologue expert en analyse d'OCT maculaire. \
Tu retournes uniquement des réponses au format JSON valide, sans texte explicatif.";

pub const REPORT_SYSTEM_PROMPT: &str =
    "Tu es un ophtalmologue expert qui rédige des rapports concis d'analyse OCT maculaire.";

pub const PLAN_SYSTEM_PROMPT: &str = "Tu es un ophtalmologue expert qui élabore des plans \
thérapeutiques basés sur l'analyse OCT maculaire.";

pub const NO_CLIENT_REPORT: &str = "Impossible de générer un rapport sans clé API OpenAI.";
pub const NO_CLIENT_PLAN: &str =
    "Impossible de générer un plan thérapeutique sans clé API OpenAI.";
pub const REPORT_FAILED: &str = "Erreur lors de la génération du rapport. Veuillez réessayer.";
pub const PLAN_FAILED: &str =
    "Erreur lors de la génération du plan thérapeutique. Veuillez réessayer.";

pub const ANALYSIS_PROMPT: &str = r#"Je suis ophtalmologue et j'ai besoin que tu analyses cette image OCT maculaire. Fournis-moi une réponse JSON structurée uniquement, sans texte explicatif avant ou après.

TRÈS IMPORTANT - INSTRUCTIONS DE MAPPING:
- L'image OCT est divisée en DEUX PARTIES: GAUCHE et DROITE
- La partie GAUCHE de l'image (côté gauche) correspond à l'ŒIL DROIT (OD) du patient dans l'oct donné
- La partie DROITE de l'image (côté droit) correspond à l'ŒIL GAUCHE (OG) du patient dans l'oct donné
- Dans ta réponse JSON:
  * Les données de l'ŒIL DROIT (partie GAUCHE de l'image) doivent être placées sous "right_eye"
  * Les données de l'ŒIL GAUCHE (partie DROITE de l'image) doivent être placées sous "left_eye"

Pour chaque œil (OD et OG), analyse les biomarqueurs suivants et retourne le résultat au format JSON :

1. DRIL (Désorganisation des couches rétiniennes internes)
   - Présence/absence
   - Si présent, décrire l'étendue

2. Kyste intrarétinien
   - Nombre de logettes
   - Taille de la plus grande logette:
     * Petite: <100μm
     * Grande: 100-200μm
     * Volumineuse: >200μm
   - Localisation: fovéolaire ou parafovéolaire

3. Intégrité des membranes
   Membrane limitante externe (MLE):
   - Continue
   - Partiellement interrompue
   - Complètement interrompue

   Zone ellipsoïde (ZE):
   - Continue
   - Partiellement interrompue
   - Complètement interrompue

4. Points hyperréflectifs
   - Présence/absence
   - Si présent:
     * Nombre approximatif
     * Localisation (intrarétinien/choroïdien)

5. Épaisseur rétinienne
   - Analyser la carte ETDRS
   - Donner les chiffres importants dans chaque secteur EXACTEMENT dans ce format:
     "epaisseur_retinienne": {
         "central": "valeur en μm",
         "superieur": "valeur en μm",
         "inferieur": "valeur en μm",
         "nasal": "valeur en μm",
         "temporal": "valeur en μm"
     }

POINTS IMPORTANTS:
- Ne mentionner que ce qui est clairement visible
- Éviter les surinterprétations
- Pour les kystes, ne les mentionner que s'ils sont clairement identifiables
- Rester objectif et précis dans les mesures
- Tu n'as pas besoin d'évaluer le Décollement Séreux Rétinien ni les Ponts Rétiniens, ces évaluations seront faites par l'ophtalmologue

RAPPEL FINAL IMPORTANT:
- "right_eye" dans le JSON = ŒIL DROIT = partie GAUCHE de l'image
- "left_eye" dans le JSON = ŒIL GAUCHE = partie DROITE de l'image

RETOURNER UNIQUEMENT UN OBJET JSON VALIDE AVEC LA STRUCTURE SUIVANTE:

{
    "left_eye": {
        "dril": {
            "status": "Présente/Absente",
            "extent": "description si présent"
        },
        "oedeme": {
            "status": "Présent/Absent",
            "nb_logette": "nombre",
            "taille": "petite/grande/volumineuse",
            "localisation": "fovéolaire/parafovéolaire"
        },
        "mle": "Continue/Partiellement interrompue/Complètement interrompue",
        "ze": "Continue/Partiellement interrompue/Complètement interrompue",
        "points_hyperreflectifs": {
            "status": "Présents/Absents",
            "nombre": "nombre approximatif",
            "localisation": "intrarétinien/choroïdien"
        },
        "epaisseur_retinienne": {
            "central": "valeur",
            "superieur": "valeur",
            "inferieur": "valeur",
            "nasal": "valeur",
            "temporal": "valeur"
        }
    },
    "right_eye": {
        "dril": {
            "status": "Présente/Absente",
            "extent": "description si présent"
        },
        "oedeme": {
            "status": "Présent/Absent",
            "nb_logette": "nombre",
            "taille": "petite/grande/volumineuse",
            "localisation": "fovéolaire/parafovéolaire"
        },
        "mle": "Continue/Partiellement interrompue/Complètement interrompue",
        "ze": "Continue/Partiellement interrompue/Complètement interrompue",
        "points_hyperreflectifs": {
            "status": "Présents/Absents",
            "nombre": "nombre approximatif",
            "localisation": "intrarétinien/choroïdien"
        },
        "epaisseur_retinienne": {
            "central": "valeur",
            "superieur": "valeur",
            "inferieur": "valeur",
            "nasal": "valeur",
            "temporal": "valeur"
        }
    }
}"#;

/// Synthesis prompt. Right-eye (OD) data comes first.
pub fn report_prompt(right_eye_json: &str, left_eye_json: &str) -> String {
    format!(
        r#"
Maintenant je voudrai selon les donnés des biomarqueur detecté, me donner une synthèse comme ceci:
Au total, l'oct maculaire met en évidence:
a l'OD : tu précise les elements suivant sous forme de paragraphe très bref:
- Si présence d'un oèdeme (epaisseur maculaire centrale augmentée) ou présence de logette d'oedeme
- Si effectivement il y'a un oedeme on cite les biomarqueur présent , puis les biomarqueur absent
- Si absence d'oèdeme (epaisseur normale et aucune logette detecté) on dit absence d'oèdeme. pas besoin de rajouter la presence/absence des biomarqueurs
- N'oublie pas d'inclure le statut des Ponts Rétiniens (bridging) et du Décollement Séreux Rétinien dans ton analyse
A L'OG : meme chose

Données pour l'OD:
{right_eye_json}

Données pour l'OG:
{left_eye_json}

Note: Kyste intrarétinien correspond à la présence de logettes d'œdème maculaire.
Note: Inclure également les informations sur les Ponts Rétiniens (bridging) et le Décollement Séreux Rétinien si présents.
"#
    )
}

/// Treatment-history line included in the plan prompt.
pub fn ivt_line(received_ivt: bool) -> String {
    let history = if received_ivt { "déjà" } else { "jamais" };
    format!("Information importante: Ce patient a {history} reçu des IVT.")
}

/// Plan prompt. `ivt_info` is empty when no patient is selected.
pub fn plan_prompt(
    report_text: &str,
    ivt_info: &str,
    right_eye_json: &str,
    left_eye_json: &str,
) -> String {
    format!(
        r#"
Partie 1: Synthèse du rapport OCT (déjà générée):
{report_text}

{ivt_info}

Partie 2:
Apres cette etape je voudrai que tu synthétise un plan therapeutique et des elements pronostic sur la recupération fonctionne/anatomique basé sur les biomarqueur present/absent, comme ceci:
Pour ce patient, ayant ou n'ayant pas déjà recu des IVT (information déjà remplie)
Plan thérapeutique:
- "nb d'injection", Internavale d'injection, molecule a priviligier
Pronostic:
- sur la récupération anatomique, ou visuelle en pourcentage (donner un pourcentage approximatif)
Je voudrai que tu me saisis des information correcte en te basant sur la présence/absence de certain biomarqueur qui sont determinant dans la récupération visuelle, tu peux te baser sur les derniers articles et recommandations sur le web pour me donner une réponse juste, et citer des references et des etudes pour appuyer la fiabilité de tes chiffres

Rappel important: Dans l'analyse OCT:
- OD (œil droit) correspond à ce qui était présenté dans la partie gauche de l'image
- OG (œil gauche) correspond à ce qui était présenté dans la partie droite de l'image

Données pour l'OD (œil droit):
{right_eye_json}

Données pour l'OG (œil gauche):
{left_eye_json}
"#
    )
}
