//! 反馈邮件模板
//!
//! 固定的西班牙语主题 / 纯文本 / HTML 模板，按命名字段替换。
//! 文案与课程原工具保持逐字一致（包括练习主题里沿用至今的
//! "Correción" 旧拼写），电子表格端按这些字符串做匹配。

use crate::models::mail::{EmailOptions, ExamFeedbackContext, ExerciseFeedbackContext};

pub fn exercise_feedback(context: &ExerciseFeedbackContext) -> EmailOptions {
    let subject = format!(
        "Correción de ejercicio {} - Grupo {}",
        context.exercise, context.group
    );

    let text = format!(
        "Mail para el grupo {grupo}.\n\
         Corrector: {corrector}.\n\
         Hola, este mail es para darles la devolución del ejercicio {ejercicio}, su nota es {nota}.\n\
         {correcciones}",
        grupo = context.group,
        corrector = context.grader,
        ejercicio = context.exercise,
        nota = context.grade,
        correcciones = context.corrections,
    );

    let html = format!(
        "<p>Mail para el grupo {grupo}.</p>\n\
         <p>Corrector: {corrector}.</p>\n\
         <p>Hola, este mail es para darles la devolución del ejercicio {ejercicio}, su nota es <strong>{nota}</strong>.</p>\n\
         {correcciones}",
        grupo = context.group,
        corrector = context.grader,
        ejercicio = context.exercise,
        nota = context.grade,
        correcciones = context.corrections,
    );

    EmailOptions {
        subject,
        text,
        html,
    }
}

pub fn exam_feedback(context: &ExamFeedbackContext) -> EmailOptions {
    let subject = format!(
        "Corrección de {} - Padrón {}",
        context.exam, context.student_id
    );

    let text = format!(
        "Mail para {nombre}.\n\
         Corrector: {corrector}.\n\
         Hola, este mail es para darles la devolución del {examen}. Tu nota es {nota}, \
         pero gracias a los puntos extra que te ganaste en los cuestionarios, tu nota final es {nota_final}.\n\
         {correcciones}",
        nombre = context.student_name,
        corrector = context.grader,
        examen = context.exam,
        nota = context.grade,
        nota_final = context.final_grade,
        correcciones = context.corrections,
    );

    let html = format!(
        "<p>Mail para {nombre}.</p>\n\
         <p>Corrector: {corrector}.</p>\n\
         <p>Hola, este mail es para darles la devolución del {examen}. Tu nota es <strong>{nota}</strong>,\n\
         pero gracias a los puntos extra que te ganaste en los cuestionarios, tu nota final es\n\
         <strong>{nota_final}</strong>.</p>\n\
         {correcciones}",
        nombre = context.student_name,
        corrector = context.grader,
        examen = context.exam,
        nota = context.grade,
        nota_final = context.final_grade,
        correcciones = context.corrections,
    );

    EmailOptions {
        subject,
        text,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_context() -> ExerciseFeedbackContext {
        ExerciseFeedbackContext {
            exercise: "Ejercicio".to_string(),
            group: "Grupo".to_string(),
            grader: "Corrector".to_string(),
            grade: "NOTA".to_string(),
            corrections: "Esta es la corrección".to_string(),
        }
    }

    fn exam_context() -> ExamFeedbackContext {
        ExamFeedbackContext {
            exam: "Examen".to_string(),
            student_id: "PADRON".to_string(),
            student_name: "Nombre Estudiante".to_string(),
            grader: "Corrector".to_string(),
            grade: "NOTA EXAMEN".to_string(),
            corrections: "Esta es la correccion".to_string(),
            bonus_points: "PUNTOS EXTRA".to_string(),
            final_grade: "NOTA FINAL".to_string(),
        }
    }

    #[test]
    fn test_exercise_template() {
        let options = exercise_feedback(&exercise_context());

        assert!(
            options
                .subject
                .contains("Correción de ejercicio Ejercicio - Grupo Grupo")
        );
        for line in [
            "Mail para el grupo Grupo.",
            "Corrector: Corrector.",
            "Hola, este mail es para darles la devolución del ejercicio Ejercicio, su nota es NOTA.",
        ] {
            assert!(options.text.contains(line), "text missing line: {line}");
        }
        for line in [
            "<p>Mail para el grupo Grupo.</p>",
            "<p>Corrector: Corrector.</p>",
            "<p>Hola, este mail es para darles la devolución del ejercicio Ejercicio, su nota es <strong>NOTA</strong>.</p>",
        ] {
            assert!(options.html.contains(line), "html missing line: {line}");
        }
        assert!(options.text.contains("Esta es la corrección"));
    }

    #[test]
    fn test_exam_template_contains_both_grades_verbatim() {
        let options = exam_feedback(&exam_context());

        // 主题带考试名和学号
        assert!(options.subject.contains("Corrección de Examen - Padrón PADRON"));
        // 正文逐字包含两个成绩值
        assert!(options.text.contains("Tu nota es NOTA EXAMEN"));
        assert!(options.text.contains("tu nota final es NOTA FINAL"));
        assert!(options.html.contains("<strong>NOTA EXAMEN</strong>"));
        assert!(options.html.contains("<strong>NOTA FINAL</strong>"));

        for line in ["Mail para Nombre Estudiante.", "Corrector: Corrector."] {
            assert!(options.text.contains(line), "text missing line: {line}");
        }
        assert!(options.html.contains("<p>Mail para Nombre Estudiante.</p>"));
        assert!(options.text.ends_with("Esta es la correccion"));
    }
}
