//! Prompt construction for the tutoring LLM.
//!
//! All prompts are in Italian, matching the feedback language of the
//! validation engine. The hint prompts are progressive: each level reveals
//! strictly more than the previous one, and only the last gives away the
//! full solution.

use disequa_core::Difficulty;

use crate::hints::HintLevel;

fn hint_context(inequality: &str) -> String {
    format!(
        "Sei un tutor di matematica che aiuta gli studenti a risolvere disequazioni lineari.\n\
         La disequazione da risolvere è: {inequality}\n\n\
         Fornisci un indizio in italiano che aiuti lo studente a progredire nella soluzione."
    )
}

/// Build the hint prompt for a given inequality and hint level.
pub fn hint_prompt(inequality: &str, level: HintLevel) -> String {
    let context = hint_context(inequality);

    match level {
        HintLevel::General => format!(
            "{context}\n\n\
             Questo è il PRIMO indizio. Fornisci un suggerimento generale sull'approccio \
             da seguire per risolvere questa disequazione.\n\
             Non dare la soluzione completa, ma indica quale dovrebbe essere il primo passo.\n\
             Mantieni l'indizio breve (massimo 2-3 frasi)."
        ),
        HintLevel::FirstStep => format!(
            "{context}\n\n\
             Questo è il SECONDO indizio. Lo studente ha già ricevuto un suggerimento generale.\n\
             Ora fornisci il primo passo concreto della soluzione con una breve spiegazione \
             del perché si fa questo passo.\n\
             Mostra l'operazione da eseguire ma non completare tutta la soluzione.\n\
             Mantieni l'indizio breve (massimo 3-4 frasi)."
        ),
        HintLevel::FullWalkthrough => format!(
            "{context}\n\n\
             Questo è il TERZO e ULTIMO indizio. Lo studente ha bisogno di una guida più dettagliata.\n\
             Fornisci una soluzione passo dopo passo completa, spiegando ogni passaggio.\n\
             Includi tutti i passaggi intermedi e la soluzione finale.\n\
             Ricorda di menzionare quando è necessario invertire il segno della disequazione \
             (se si divide/moltiplica per un numero negativo)."
        ),
    }
}

fn difficulty_description(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "facile (coefficienti piccoli, numeri positivi, operazioni semplici)",
        Difficulty::Medium => "medio (coefficienti più grandi, possibili numeri negativi)",
        Difficulty::Hard => "difficile (coefficienti negativi, numeri grandi, operazioni complesse)",
    }
}

/// Build the puzzle-generation prompt for a difficulty level.
///
/// The model is instructed to answer with bare JSON; the generator still
/// strips markdown fences defensively before deserializing.
pub fn puzzle_prompt(difficulty: Difficulty) -> String {
    format!(
        "Genera una disequazione lineare di primo grado (con una sola variabile x) \
         di livello {}.\n\n\
         Requisiti:\n\
         1. La disequazione deve essere nel formato: ax + b [operatore] c\n\
         2. Usa uno di questi operatori: >, <, ≥, ≤\n\
         3. I coefficienti devono essere numeri interi (non zero per 'a')\n\
         4. La disequazione deve avere una soluzione unica e ben definita\n\
         5. Per livello facile: usa coefficienti tra -5 e 5 (escluso 0)\n\
         6. Per livello medio: usa coefficienti tra -10 e 10 (escluso 0)\n\
         7. Per livello difficile: usa coefficienti tra -15 e 15 (escluso 0), \
         preferibilmente con numeri negativi\n\n\
         Rispondi SOLO con un oggetto JSON in questo formato esatto \
         (senza markdown, senza spiegazioni):\n\
         {{\n\
         \"inequality\": \"la disequazione (es: 2x + 5 > 13)\",\n\
         \"solution\": \"la soluzione (es: x > 4)\",\n\
         \"steps\": [\"passo 1\", \"passo 2\", \"passo 3\"]\n\
         }}\n\n\
         Ricorda: se dividi o moltiplichi per un numero negativo, devi invertire \
         il segno della disequazione.",
        difficulty_description(difficulty)
    )
}
